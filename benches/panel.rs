//! Panel rendering and input benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use experience_panel::ansi::AnsiWriter;
use experience_panel::buffer::{BlurFilter, Canvas, PixelBuffer, Rect};
use experience_panel::input::{InputParser, MouseEvent};
use experience_panel::{
    Catalog, DescriptionPanel, ExperienceEntry, Image, Line, PageContent, PanelOptions, Rgba,
    Style, Themed,
};
use std::hint::black_box;

fn catalog() -> Catalog {
    let cover = Themed::uniform(Image::new(
        "cover",
        PixelBuffer::vertical_gradient(32, 32, Rgba::BLUE, Rgba::BLACK),
    ));
    let logo = Themed::uniform(Image::new("logo", PixelBuffer::filled(4, 4, Rgba::RED)));
    let entry = ExperienceEntry::new("Gamma", "Engineer", logo, cover).with_page("/", |nav| {
        let mut page = PageContent::new();
        for i in 0..20 {
            page = page.line(
                Line::new()
                    .push(format!("Line {i} of the overview, "))
                    .push(nav.link("more", "more")),
            );
        }
        page
    });
    Catalog::new().with_entry("gamma", entry)
}

fn panel() -> DescriptionPanel {
    DescriptionPanel::new("chip:gamma".into(), |_| {}, &catalog(), PanelOptions::default())
        .unwrap()
}

fn panel_render(c: &mut Criterion) {
    let mut hidden = panel();
    let mut canvas = Canvas::new(120, 40);

    c.bench_function("panel_render_hidden_120x40", |b| {
        b.iter(|| hidden.render(black_box(&mut canvas), &true))
    });

    let mut revealed = panel();
    revealed.render(&mut canvas, &true);
    let (x, y) = canvas.find_text("Gamma").unwrap();
    revealed.handle_mouse(&MouseEvent::move_to(x, y));

    c.bench_function("panel_render_revealed_120x40", |b| {
        b.iter(|| revealed.render(black_box(&mut canvas), &true))
    });
}

fn blur(c: &mut Criterion) {
    let mut canvas = Canvas::new(120, 40);
    let image = PixelBuffer::vertical_gradient(32, 32, Rgba::WHITE, Rgba::BLUE);
    let area = canvas.bounds();

    c.bench_function("backdrop_blur_16px", |b| {
        b.iter(|| {
            canvas.draw_image(area, &image);
            canvas.apply_backdrop_blur(area, black_box(BlurFilter::px(16)));
        })
    });

    c.bench_function("text_blur_4px", |b| {
        b.iter(|| {
            for y in 0..40 {
                canvas.draw_text(0, y, "The quick brown fox jumps over the lazy dog", Style::NONE);
            }
            canvas.apply_text_blur(Rect::new(0, 0, 120, 40), black_box(BlurFilter::px(4)));
        })
    });
}

fn ansi_output(c: &mut Criterion) {
    let mut panel = panel();
    let mut canvas = Canvas::new(120, 40);
    panel.render(&mut canvas, &true);

    c.bench_function("ansi_render_canvas_120x40", |b| {
        b.iter(|| {
            let mut writer = AnsiWriter::new(Vec::with_capacity(64 * 1024));
            writer.render_canvas(black_box(&canvas));
            writer.into_inner()
        })
    });
}

fn mouse_input(c: &mut Criterion) {
    let mut stream = Vec::new();
    for i in 0..200u32 {
        stream.extend_from_slice(format!("\x1b[<35;{};{}M", i % 120 + 1, i % 40 + 1).as_bytes());
    }

    c.bench_function("parse_200_mouse_moves", |b| {
        b.iter(|| {
            let mut parser = InputParser::new();
            parser.parse_all(black_box(&stream))
        })
    });

    let mut panel = panel();
    let mut canvas = Canvas::new(120, 40);
    panel.render(&mut canvas, &true);
    let mut parser = InputParser::new();
    let (events, _) = parser.parse_all(&stream);

    c.bench_function("panel_route_200_mouse_moves", |b| {
        b.iter(|| {
            for event in &events {
                if let Some(mouse) = event.mouse() {
                    black_box(panel.handle_mouse(mouse));
                }
            }
        })
    });
}

criterion_group!(benches, panel_render, blur, ansi_output, mouse_input);
criterion_main!(benches);
