//! Fuzz target for panel event routing.
//!
//! Replays arbitrary pointer events and canvas sizes against a panel. Routing
//! must never panic and the history must always end at the current page.

#![no_main]

use arbitrary::Arbitrary;
use experience_panel::buffer::{Canvas, PixelBuffer};
use experience_panel::input::{MouseButton, MouseEvent, MouseEventKind};
use experience_panel::{
    Catalog, DescriptionPanel, ExperienceEntry, Image, Line, PageContent, PanelOptions, Rgba,
    Themed, TruncateMiss,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    width: u8,
    height: u8,
    keep_on_miss: bool,
    dark: bool,
    events: Vec<(u8, u8, bool)>,
}

fn catalog() -> Catalog {
    let image = Themed::uniform(Image::new("img", PixelBuffer::filled(3, 3, Rgba::GREEN)));
    let entry = ExperienceEntry::new("Fuzz", "Tester", image.clone(), image)
        .with_page("/", |nav| {
            PageContent::new().line(Line::new().push(nav.link("a", "a")).push(" ").push(nav.link("b", "b")))
        })
        .with_page("a", |nav| PageContent::new().line(nav.link("/", "/")));
    Catalog::new().with_entry("fuzz", entry)
}

fuzz_target!(|input: Input| {
    let policy = if input.keep_on_miss {
        TruncateMiss::Keep
    } else {
        TruncateMiss::Clear
    };
    let options = PanelOptions::default().with_truncate_miss(policy);
    let Ok(mut panel) = DescriptionPanel::new("chip:fuzz".into(), |_| {}, &catalog(), options) else {
        return;
    };

    let mut canvas = Canvas::new(u32::from(input.width) + 1, u32::from(input.height) + 1);
    panel.render(&mut canvas, &input.dark);

    for (x, y, press) in input.events.into_iter().take(256) {
        let kind = if press {
            MouseEventKind::Press
        } else {
            MouseEventKind::Move
        };
        let button = if press { MouseButton::Left } else { MouseButton::None };
        panel.handle_mouse(&MouseEvent::new(u32::from(x), u32::from(y), button, kind));
        panel.render(&mut canvas, &input.dark);

        let history = panel.history();
        if let Some(last) = history.pages().last() {
            assert_eq!(last, history.current_page());
        }
    }
});
