use crate::{boxes::BoundingBox, flip::FlipDecision, plan::GeometryPlan};

/// Map a box from source pixels to canvas pixels.
///
/// The box is scaled and shifted by the plan, clipped to the canvas and mirrored
/// with the canvas extents. Boxes that end up with no area on the canvas are
/// discarded, as are boxes with non-finite coordinates.
///
/// # Returns
///
/// The transformed box, or `None` if nothing of it is left on the canvas.
///
/// # Examples
///
/// ```
/// use detaug::{boxes::BoundingBox, flip::FlipDecision, plan::GeometryPlan};
/// use detaug::transform::transform_box;
/// use detaug_image::ImageSize;
///
/// let plan = GeometryPlan::from_offsets(
///     ImageSize { width: 100, height: 100 },
///     ImageSize { width: 50, height: 50 },
///     ImageSize { width: 50, height: 50 },
///     0,
///     0,
/// )
/// .unwrap();
///
/// let bbox = BoundingBox::new(10.0, 90.0, 10.0, 90.0);
/// let out = transform_box(&bbox, &plan, FlipDecision::NONE).unwrap();
///
/// assert_eq!(out, BoundingBox::new(5.0, 45.0, 5.0, 45.0));
/// ```
pub fn transform_box<L: Clone>(
    bbox: &BoundingBox<L>,
    plan: &GeometryPlan,
    flip: FlipDecision,
) -> Option<BoundingBox<L>> {
    if ![bbox.xmin, bbox.xmax, bbox.ymin, bbox.ymax]
        .iter()
        .all(|c| c.is_finite())
    {
        return None;
    }

    let net_w = plan.canvas_size.width as f32;
    let net_h = plan.canvas_size.height as f32;
    let dx = plan.dx as f32;
    let dy = plan.dy as f32;

    let xmin = (bbox.xmin * plan.scale_x + dx).max(0.0);
    let xmax = (bbox.xmax * plan.scale_x + dx).min(net_w);
    let ymin = (bbox.ymin * plan.scale_y + dy).max(0.0);
    let ymax = (bbox.ymax * plan.scale_y + dy).min(net_h);

    if xmin >= xmax || ymin >= ymax {
        return None;
    }

    let (xmin, xmax) = if flip.horizontal {
        (net_w - xmax, net_w - xmin)
    } else {
        (xmin, xmax)
    };

    let (ymin, ymax) = if flip.vertical {
        (net_h - ymax, net_h - ymin)
    } else {
        (ymin, ymax)
    };

    Some(BoundingBox::with_label(
        xmin,
        xmax,
        ymin,
        ymax,
        bbox.label.clone(),
    ))
}

/// Map every box through [`transform_box`], keeping the survivors in input order.
pub fn transform_boxes<L: Clone>(
    boxes: &[BoundingBox<L>],
    plan: &GeometryPlan,
    flip: FlipDecision,
) -> Vec<BoundingBox<L>> {
    boxes
        .iter()
        .filter_map(|bbox| transform_box(bbox, plan, flip))
        .collect()
}
