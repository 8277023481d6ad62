//! Static page content: headings, explanatory text, KPI tiles and FAQ.

use crate::data::Summary;
use egui::{Color32, RichText};

pub const TITLE: &str = "Lista de Precios de Productos en Miami 🏖";
pub const TAGLINE: &str = "¡Mejora tu estrategia de precios y crece tus ventas!";
pub const WELCOME: &str = "Bienvenidos a nuestro demo de la base de datos de precios mas completa en Miami. \
Nos complace tenerlos aquí para mostrarles cómo nuestra innovadora solución de datos puede \
revolucionar la gestión y el análisis de la información en su empresa.";
pub const INSTRUCTIONS_TITLE: &str = "Cómo utilizar la tabla de datos:";
pub const INSTRUCTIONS: [&str; 3] = [
    "Acceder a la tabla: desplázate hacia abajo para encontrar la tabla de datos.",
    "Filtrar datos: usa el cuadro de búsqueda o agrega filtros por columna encima de la tabla.",
    "Descargar datos: usa el botón de descargar debajo de la tabla de datos.",
];
pub const SUBTITLE: &str = "Lista de Precios";
pub const DISCLAIMER: &str = "Esta tabla es solo una demostración y no representa la base de datos \
completa de precios de productos en Miami. Los datos mostrados son solo ejemplos y pueden no reflejar \
la información más actualizada disponible en nuestra plataforma. Para acceder a la base de datos \
completa y obtener información en tiempo real, por favor, suscríbase a nuestro servicio.";
pub const FAQ_TITLE: &str = "Preguntas Frecuentes";
pub const FOOTER: &str = "© 2024 Sinopsis Data, LLC. All Rights Reserved.";

pub const FAQ: [(&str, &str); 6] = [
    (
        "1. ¿Qué es la base de datos de precios de productos en Miami?",
        "Es una recopilación en tiempo real de los precios de diversos productos en tiendas y supermercados de la ciudad de Miami.",
    ),
    (
        "2. ¿Qué tipo de productos están incluidos en la base de datos?",
        "Incluye una amplia variedad de productos, desde alimentos y bebidas hasta productos de limpieza y artículos de cuidado personal.",
    ),
    (
        "3. ¿Con qué frecuencia se actualizan los precios en la base de datos?",
        "Los precios se actualizan en tiempo real, lo que garantiza que siempre tenga acceso a la información más reciente.",
    ),
    (
        "4. ¿Puedo filtrar los datos por tienda o por categoría de producto?",
        "Sí, la plataforma le permite filtrar los datos por tienda, categoría de producto y otros criterios específicos.",
    ),
    (
        "5. ¿Qué beneficios ofrece utilizar esta base de datos?",
        "Le permite comparar precios fácilmente, identificar tendencias de precios y tomar decisiones de compra más informadas.",
    ),
    (
        "6. ¿Cómo puedo suscribirme al servicio?",
        "Puede suscribirse poniéndose en contacto con nosotros en info@sinopsisdata.com.",
    ),
];

const ACCENT: Color32 = Color32::from_rgb(100, 149, 237);

pub fn header(ui: &mut egui::Ui) {
    ui.add_space(5.0);
    ui.label(RichText::new(TITLE).size(26.0).strong().color(ACCENT));
    ui.separator();
    ui.label(RichText::new(TAGLINE).italics());
    ui.add_space(8.0);
    ui.label(WELCOME);
    ui.add_space(8.0);
    ui.label(RichText::new(INSTRUCTIONS_TITLE).strong());
    for line in INSTRUCTIONS {
        ui.label(format!("• {line}"));
    }
    ui.add_space(12.0);
    ui.label(RichText::new(SUBTITLE).size(20.0).strong());
    ui.add_space(6.0);
}

/// Four KPI tiles side by side.
pub fn metric_tiles(ui: &mut egui::Ui, summary: &Summary) {
    let tiles = summary.tiles();
    ui.columns(tiles.len(), |columns| {
        for (ui, (label, value)) in columns.iter_mut().zip(tiles) {
            egui::Frame::none()
                .fill(ui.visuals().widgets.noninteractive.bg_fill)
                .rounding(8.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(label).size(13.0).color(Color32::GRAY));
                    ui.label(RichText::new(value.to_string()).size(28.0).strong());
                });
        }
    });
    ui.add_space(10.0);
}

pub fn disclaimer(ui: &mut egui::Ui) {
    ui.add_space(6.0);
    ui.label(RichText::new(DISCLAIMER).italics().size(11.0));
}

pub fn faq(ui: &mut egui::Ui) {
    ui.add_space(16.0);
    ui.label(RichText::new(FAQ_TITLE).size(20.0).strong());
    ui.add_space(6.0);
    for (question, answer) in FAQ {
        ui.label(RichText::new(question).strong());
        ui.label(answer);
        ui.add_space(6.0);
    }
    ui.separator();
    ui.label(RichText::new(FOOTER).italics().size(11.0).color(Color32::GRAY));
}
