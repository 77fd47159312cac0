use super::*;
use crate::{
    layers::assemble::generate,
    style::config::{FadeConfig, Side},
};

#[derive(Default)]
struct MockBackend {
    calls: Vec<String>,
    layouts: Vec<BandLayout>,
}

impl BandBackend for MockBackend {
    fn begin_edge(&mut self, set: &BandSet, region: Rect) -> FineBlurResult<()> {
        self.calls.push(format!("begin {:?} {}", set.edge, region.height()));
        Ok(())
    }

    fn draw_band(&mut self, band: &Band, layout: &BandLayout) -> FineBlurResult<()> {
        self.calls.push(format!("draw {}", band.index));
        self.layouts.push(*layout);
        Ok(())
    }

    fn end_edge(&mut self, edge: Edge) -> FineBlurResult<()> {
        self.calls.push(format!("end {edge:?}"));
        Ok(())
    }
}

#[test]
fn paint_bands_visits_edges_in_order() {
    let blur = generate(&FadeConfig::new(4.0, 8.0, "#ffffff", Side::Both));
    let style = RenderStyle::new(Canvas::new(100, 50), 6.0);
    let mut backend = MockBackend::default();
    paint_bands(&mut backend, &blur, &style).unwrap();

    // 8px: one fine band (2px) then a 4px and a 9px coarse band.
    assert_eq!(
        backend.calls,
        vec![
            "begin Top 8",
            "draw 3",
            "draw 2",
            "draw 1",
            "end Top",
            "begin Bottom 8",
            "draw 3",
            "draw 2",
            "draw 1",
            "end Bottom",
        ]
    );
    let stack: Vec<usize> = backend.layouts.iter().map(|l| l.stack_index).collect();
    assert_eq!(stack, vec![0, 1, 2, 0, 1, 2]);
}

#[test]
fn anchored_rects_hug_their_edge() {
    let vp = Canvas::new(200, 100);
    assert_eq!(anchored_rect(Edge::Top, 30.0, vp), Rect::new(0.0, 0.0, 200.0, 30.0));
    assert_eq!(
        anchored_rect(Edge::Bottom, 30.0, vp),
        Rect::new(0.0, 70.0, 200.0, 100.0)
    );
    assert_eq!(
        anchored_rect(Edge::Bottom, 500.0, vp),
        Rect::new(0.0, 0.0, 200.0, 100.0)
    );
    assert_eq!(anchored_rect(Edge::Top, -3.0, vp).height(), 0.0);
}

#[test]
fn only_anchored_corners_are_rounded() {
    let top = anchored_radii(Edge::Top, 12.0);
    assert_eq!((top.top_left, top.top_right), (12.0, 12.0));
    assert_eq!((top.bottom_left, top.bottom_right), (0.0, 0.0));

    let bottom = anchored_radii(Edge::Bottom, 12.0);
    assert_eq!((bottom.top_left, bottom.top_right), (0.0, 0.0));
    assert_eq!((bottom.bottom_left, bottom.bottom_right), (12.0, 12.0));

    assert_eq!(RenderStyle::new(Canvas::new(1, 1), -4.0).corner_radius, 0.0);
}
