use super::layout::{
    wrap_text, Align, Color, Document, Font, PageWriter, CONTENT_WIDTH, MARGIN, PAGE_WIDTH,
};
use super::metrics::FontStyle;
use crate::types::Itinerary;

const LINE_HEIGHT: f32 = 5.0;
const SEPARATOR: Color = Color::gray(200);

const TITLE: Font = Font::new(FontStyle::Bold, 22.0, Color::TEAL);
const SUBTITLE: Font = Font::new(FontStyle::Regular, 12.0, Color::gray(100));
const SUMMARY: Font = Font::new(FontStyle::Italic, 11.0, Color::gray(60));
const SECTION: Font = Font::new(FontStyle::Bold, 16.0, Color::BLACK);
const SUBSECTION: Font = Font::new(FontStyle::Bold, 14.0, Color::BLACK);
const DAY_HEADER: Font = Font::new(FontStyle::Bold, 12.0, Color::TEAL);
const BODY: Font = Font::new(FontStyle::Regular, 10.0, Color::BLACK);
const BODY_BOLD: Font = Font::new(FontStyle::Bold, 10.0, Color::BLACK);
const FOOTER: Font = Font::new(FontStyle::Regular, 8.0, Color::gray(150));

/// Lay out the printable travel guide.
///
/// Sections: header and summary, daily plans, practical info, historical
/// sites, hotels, packing list, local tips, then a page footer.
pub fn layout_itinerary(itinerary: &Itinerary) -> Document {
    let mut writer = PageWriter::new();

    header(&mut writer, itinerary);
    daily_plans(&mut writer, itinerary);

    writer.advance(5.0);
    writer.ensure_space(20.0);
    writer.rule(SEPARATOR);
    writer.advance(10.0);

    practical_info(&mut writer, itinerary);
    historical_sites(&mut writer, itinerary);
    hotels(&mut writer, itinerary);

    if let Some(items) = itinerary.packing_list() {
        bullet_section(&mut writer, "Dans la valise", items);
        writer.advance(8.0);
    }
    if let Some(tips) = itinerary.local_tips() {
        bullet_section(&mut writer, "Conseils Locaux", tips);
    }

    writer.finish(FOOTER, |page, total| {
        format!("Généré par Évasion - Page {page} sur {total}")
    })
}

fn header(writer: &mut PageWriter, itinerary: &Itinerary) {
    centered(writer, &itinerary.trip_title, TITLE, 10.0);

    centered(
        writer,
        &format!("Voyage à {}", itinerary.destination),
        SUBTITLE,
        7.0,
    );
    writer.advance(8.0);

    writer.paragraph(&itinerary.summary, MARGIN, CONTENT_WIDTH, SUMMARY, LINE_HEIGHT);
    writer.advance(10.0);

    writer.ensure_space(10.0);
    writer.rule(SEPARATOR);
    writer.advance(10.0);
}

// Wrapped to the content width, one centred run per line.
fn centered(writer: &mut PageWriter, text: &str, font: Font, line_height: f32) {
    for line in wrap_text(text, font.style, font.size, CONTENT_WIDTH) {
        writer.ensure_space(line_height);
        writer.text_at(PAGE_WIDTH / 2.0, line, font, Align::Center);
        writer.advance(line_height);
    }
}

fn daily_plans(writer: &mut PageWriter, itinerary: &Itinerary) {
    // Heading stays with the first day header.
    writer.ensure_space(40.0);
    writer.text_at(MARGIN, "Itinéraire Détaillé", SECTION, Align::Left);
    writer.advance(10.0);

    for plan in &itinerary.daily_plans {
        writer.ensure_space(30.0);
        writer.paragraph(
            &format!("Jour {}: {}", plan.day, plan.theme),
            MARGIN,
            CONTENT_WIDTH,
            DAY_HEADER,
            7.0,
        );

        for activity in &plan.activities {
            bullet(
                writer,
                &format!("{}: {}", activity.time, activity.description),
            );
        }

        writer.advance(5.0);
    }
}

fn practical_info(writer: &mut PageWriter, itinerary: &Itinerary) {
    let Some(info) = itinerary.practical_info() else {
        return;
    };

    writer.ensure_space(60.0);
    writer.text_at(MARGIN, "Infos Pratiques & Budget", SECTION, Align::Left);
    writer.advance(10.0);

    let entries = [
        format!("Budget estimé: {}", info.budget_estimate),
        format!("Devise: {}", info.currency),
        format!("Spécialités culinaires: {}", info.local_dishes.join(", ")),
        format!("Météo: {}", info.weather_tip),
    ];
    for entry in &entries {
        bullet(writer, entry);
    }

    writer.advance(10.0);
}

fn historical_sites(writer: &mut PageWriter, itinerary: &Itinerary) {
    let Some(sites) = itinerary.historical_sites() else {
        return;
    };

    subsection_heading(writer, "Sites Historiques Incontournables");
    for site in sites {
        named_entry(
            writer,
            &format!("• {} ({})", site.name, site.ticket_price),
            &site.description,
        );
    }
    writer.advance(4.0);
}

fn hotels(writer: &mut PageWriter, itinerary: &Itinerary) {
    let Some(hotels) = itinerary.hotel_recommendations() else {
        return;
    };

    subsection_heading(writer, "Hôtels Recommandés");
    for hotel in hotels {
        named_entry(
            writer,
            &format!("• {} ({})", hotel.name, hotel.category),
            &hotel.description,
        );
    }
    writer.advance(4.0);
}

fn bullet_section(writer: &mut PageWriter, title: &str, items: &[String]) {
    subsection_heading(writer, title);
    for item in items {
        bullet(writer, item);
    }
}

fn subsection_heading(writer: &mut PageWriter, title: &str) {
    writer.ensure_space(60.0);
    writer.text_at(MARGIN, title, SUBSECTION, Align::Left);
    writer.advance(8.0);
}

fn bullet(writer: &mut PageWriter, text: &str) {
    writer.paragraph(
        &format!("• {text}"),
        MARGIN + 5.0,
        CONTENT_WIDTH - 5.0,
        BODY,
        LINE_HEIGHT,
    );
    writer.advance(2.0);
}

// Bold name line followed by an indented description, kept together.
fn named_entry(writer: &mut PageWriter, name: &str, description: &str) {
    let name_lines =
        wrap_text(name, BODY_BOLD.style, BODY_BOLD.size, CONTENT_WIDTH - 5.0);
    let description_lines = wrap_text(
        description,
        BODY.style,
        BODY.size,
        CONTENT_WIDTH - 10.0,
    );

    let height = (name_lines.len() + description_lines.len()) as f32 * LINE_HEIGHT + 4.0;
    if height <= writer.bottom() - MARGIN {
        writer.ensure_space(height);
    }

    writer.write_lines(&name_lines, MARGIN + 5.0, BODY_BOLD, LINE_HEIGHT);
    writer.write_lines(&description_lines, MARGIN + 10.0, BODY, LINE_HEIGHT);
    writer.advance(4.0);
}
