use std::cell::RefCell;
use std::rc::Rc;

use virtual_scroll::{
    ContentTrack, Edges, Options, Point, RowRect, ScrollContainer, Size, VirtualScroll,
};

/// A toy host: rows of varying height stacked in a 400px-tall container.
struct Surface {
    heights: Vec<f64>,
    scroll: f64,
    painted: std::ops::Range<usize>,
    translate: f64,
}

struct Container(Rc<RefCell<Surface>>);
struct Track(Rc<RefCell<Surface>>);

impl ScrollContainer for Container {
    type Event = ();

    fn scroll_position(&self) -> Point {
        Point::new(0.0, self.0.borrow().scroll)
    }

    fn visible_size(&self) -> Size {
        Size::new(300.0, 400.0)
    }

    fn bounding_rect(&self) -> RowRect {
        RowRect::from_origin_size(0.0, 0.0, 300.0, 400.0)
    }

    fn padding(&self) -> Edges {
        Edges::default()
    }

    fn scroll_to(&mut self, position: Point) {
        self.0.borrow_mut().scroll = position.y;
    }

    fn add_scroll_listener(&mut self) {
        println!("listening for scroll");
    }

    fn remove_scroll_listener(&mut self) {
        println!("stopped listening for scroll");
    }
}

impl ContentTrack for Track {
    fn natural_size(&self) -> Size {
        let s = self.0.borrow();
        Size::new(300.0, s.heights[s.painted.clone()].iter().sum())
    }

    fn child_rects(&self, out: &mut Vec<RowRect>) {
        let s = self.0.borrow();
        let mut top = s.translate - s.scroll;
        for i in s.painted.clone() {
            out.push(RowRect::from_origin_size(0.0, top, 300.0, s.heights[i]));
            top += s.heights[i];
        }
    }
}

type Engine = VirtualScroll<String, Container, Track>;

fn paint(surface: &Rc<RefCell<Surface>>, engine: &Engine) {
    let mut s = surface.borrow_mut();
    s.painted = engine.render_window().range();
    s.translate = engine.positional_offset().translate().unwrap_or(0.0);
}

fn main() {
    let heights: Vec<f64> = (0..10_000).map(|i| 20.0 + (i % 7) as f64 * 6.0).collect();
    let rows: Vec<String> = (0..heights.len()).map(|i| format!("row {i}")).collect();
    let surface = Rc::new(RefCell::new(Surface {
        painted: 0..heights.len(),
        heights,
        scroll: 0.0,
        translate: 0.0,
    }));

    let mut engine = VirtualScroll::new(
        Container(Rc::clone(&surface)),
        Track(Rc::clone(&surface)),
        rows,
        Options::vertical(3),
    );
    engine.add_scroll_observer(|v: &Engine, _: &()| {
        println!(
            "scrolled to {} -> rows {:?}, offset {:?}",
            v.scroll_position(),
            v.render_window().range(),
            v.positional_offset()
        );
    });
    paint(&surface, &engine);

    surface.borrow_mut().scroll = 12_345.0;
    engine.on_scroll(());
    paint(&surface, &engine);
    println!("first rendered: {:?}", engine.render_rows().first());

    engine.move_to_row(9_000);
    engine.on_scroll(());
    paint(&surface, &engine);

    // Replace the data: paint every row once, then commit the measurement.
    let pending = engine.update_rows((0..500).map(|i| format!("item {i}")).collect());
    surface.borrow_mut().heights.truncate(500);
    surface.borrow_mut().scroll = 0.0;
    paint(&surface, &engine);
    pending.commit(&mut engine);
    paint(&surface, &engine);
    println!(
        "after update: rows {:?}, offset {:?}",
        engine.render_window().range(),
        engine.positional_offset()
    );
}
