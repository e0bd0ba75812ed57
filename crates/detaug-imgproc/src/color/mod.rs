mod hsv;

pub use hsv::{adjust_hsv, hsv_from_rgb, rgb_from_hsv, wrap_hue, HUE_RANGE};
