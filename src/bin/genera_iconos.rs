// PWA icon generator
// Decision: icons are drawn programmatically so no binary assets need to
// live in the repository. Run once before deploying; overwrites existing
// files.

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Sizes the manifest references.
const TAMANOS: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

const GRADIENTE_ARRIBA: Rgb<u8> = Rgb([102, 126, 234]);
const GRADIENTE_ABAJO: Rgb<u8> = Rgb([118, 75, 162]);
const BLANCO: Rgb<u8> = Rgb([255, 255, 255]);
const GRIS_CELDA: Rgb<u8> = Rgb([240, 240, 240]);
const COLORES_EVENTOS: [Rgb<u8>; 3] = [
    Rgb([16, 185, 129]),
    Rgb([245, 158, 11]),
    Rgb([239, 68, 68]),
];

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    std::fs::create_dir_all("static/icons").context("Failed to create static/icons")?;

    for tamano in TAMANOS {
        let icono = crear_icono(tamano);
        let ruta = format!("static/icons/icon-{}x{}.png", tamano, tamano);
        icono
            .save(&ruta)
            .with_context(|| format!("Failed to write {}", ruta))?;
        info!("Wrote {}", ruta);
    }

    info!("Generated {} icons in static/icons/", TAMANOS.len());
    Ok(())
}

/// Draw one calendar icon: gradient background, white rounded body, header
/// band, 7x5 day grid and a staircase of three event dots.
fn crear_icono(tamano: u32) -> RgbImage {
    let mut img = RgbImage::new(tamano, tamano);

    // Vertical gradient background, one row at a time
    for y in 0..tamano {
        let t = y as f32 / tamano as f32;
        let color = mezclar(GRADIENTE_ARRIBA, GRADIENTE_ABAJO, t);
        draw_filled_rect_mut(&mut img, Rect::at(0, y as i32).of_size(tamano, 1), color);
    }

    let margen = (tamano / 8) as i32;
    let ancho = tamano as i32 - 2 * margen;
    let alto = ancho;
    let radio = (tamano / 20) as i32;

    // White calendar body
    rect_redondeado(&mut img, margen, margen, ancho, alto, radio, BLANCO);

    // Header band: rounded on top, squared off at the bottom
    let alto_cabecera = alto / 4;
    rect_redondeado(
        &mut img,
        margen,
        margen,
        ancho,
        alto_cabecera,
        radio,
        GRADIENTE_ARRIBA,
    );
    draw_filled_rect_mut(
        &mut img,
        Rect::at(margen, margen + alto_cabecera - radio).of_size(ancho as u32, radio as u32),
        GRADIENTE_ARRIBA,
    );

    // Day grid, 7 columns by 5 rows, 2px gaps
    let celda_ancho = ancho / 7;
    let celda_alto = (alto - alto_cabecera) / 5;
    let inicio_y = margen + alto_cabecera;

    for fila in 0..5i32 {
        for col in 0..7i32 {
            let x = margen + col * celda_ancho;
            let y = inicio_y + fila * celda_alto;
            let color = if (fila + col) % 2 == 0 {
                GRIS_CELDA
            } else {
                BLANCO
            };
            draw_filled_rect_mut(
                &mut img,
                Rect::at(x, y).of_size((celda_ancho - 2) as u32, (celda_alto - 2) as u32),
                color,
            );
        }
    }

    // Event dots stepping down across the grid
    let radio_evento = (tamano / 40) as i32;
    for (i, color) in COLORES_EVENTOS.iter().enumerate() {
        let i = i as i32;
        let cx = margen + (2 * i + 1) * celda_ancho + celda_ancho / 2;
        let cy = inicio_y + i * celda_alto + celda_alto / 2;
        draw_filled_circle_mut(&mut img, (cx, cy), radio_evento, *color);
    }

    img
}

/// Filled rectangle with rounded corners: two overlapping rectangles plus a
/// circle in each corner.
fn rect_redondeado(
    img: &mut RgbImage,
    x: i32,
    y: i32,
    ancho: i32,
    alto: i32,
    radio: i32,
    color: Rgb<u8>,
) {
    draw_filled_rect_mut(
        img,
        Rect::at(x + radio, y).of_size((ancho - 2 * radio) as u32, alto as u32),
        color,
    );
    draw_filled_rect_mut(
        img,
        Rect::at(x, y + radio).of_size(ancho as u32, (alto - 2 * radio) as u32),
        color,
    );
    for (cx, cy) in [
        (x + radio, y + radio),
        (x + ancho - radio - 1, y + radio),
        (x + radio, y + alto - radio - 1),
        (x + ancho - radio - 1, y + alto - radio - 1),
    ] {
        draw_filled_circle_mut(img, (cx, cy), radio, color);
    }
}

fn mezclar(desde: Rgb<u8>, hasta: Rgb<u8>, t: f32) -> Rgb<u8> {
    let canal = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
    Rgb([
        canal(desde[0], hasta[0]),
        canal(desde[1], hasta[1]),
        canal(desde[2], hasta[2]),
    ])
}
