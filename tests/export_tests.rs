mod common;

use common::{activity, itinerary, kyoto};
use evasion_planner::{
    export::{
        layout::{FOOTER_Y, MARGIN, PAGE_HEIGHT},
        layout_itinerary,
    },
    export_itinerary, PlannerError,
};

const LONG_ACTIVITY: &str = "Longue promenade guidée à travers les ruelles du quartier historique, \
     avec une halte dans chaque atelier d'artisan pour découvrir la céramique, la laque et le papier \
     traditionnel avant de rejoindre le marché couvert pour une dégustation";

#[test]
fn test_long_day_spans_several_pages() {
    let mut trip = itinerary("Kyoto", 1);
    trip.daily_plans[0].activities = (0..40)
        .map(|i| activity(&format!("{}h00", 6 + i % 16), LONG_ACTIVITY))
        .collect();

    let document = layout_itinerary(&trip);
    let total = document.page_count();
    assert!(total > 1, "expected several pages, got {total}");

    for (index, page) in document.pages.iter().enumerate() {
        let footers: Vec<&str> = page
            .runs
            .iter()
            .filter(|run| run.y == FOOTER_Y)
            .map(|run| run.text.as_str())
            .collect();
        assert_eq!(
            footers,
            vec![format!("Généré par Évasion - Page {} sur {}", index + 1, total)]
        );

        for run in page.runs.iter().filter(|run| run.y != FOOTER_Y) {
            assert!(
                run.y <= PAGE_HEIGHT - MARGIN,
                "page {} has text below the margin at y={}: {:?}",
                index + 1,
                run.y,
                run.text
            );
        }
    }

    let artifact = export_itinerary(&trip).unwrap();
    assert_eq!(artifact.page_count, total);
}

#[test]
fn test_sections_follow_the_guide_order() {
    let text: Vec<String> = layout_itinerary(&kyoto())
        .pages
        .iter()
        .flat_map(|page| page.text().map(str::to_string).collect::<Vec<_>>())
        .collect();
    let position = |needle: &str| {
        text.iter()
            .position(|line| line.contains(needle))
            .unwrap_or_else(|| panic!("missing {needle:?}"))
    };

    assert!(position("Voyage à Kyoto") < position("Itinéraire Détaillé"));
    assert!(position("Jour 1") < position("Jour 2"));
    assert!(position("Jour 3") < position("Infos Pratiques & Budget"));
    assert!(position("Infos Pratiques & Budget") < position("Sites Historiques Incontournables"));
    assert!(position("Sites Historiques Incontournables") < position("Hôtels Recommandés"));
    assert!(position("Hôtels Recommandés") < position("Dans la valise"));
    assert!(position("Dans la valise") < position("Conseils Locaux"));
}

#[test]
fn test_absent_sections_are_left_out() {
    let document = layout_itinerary(&itinerary("Rome", 2));
    let all_text: String = document
        .pages
        .iter()
        .flat_map(|page| page.text().map(str::to_string).collect::<Vec<_>>())
        .collect::<Vec<_>>()
        .join("\n");

    assert!(all_text.contains("Itinéraire Détaillé"));
    assert!(!all_text.contains("Hôtels Recommandés"));
    assert!(!all_text.contains("Dans la valise"));
    assert!(!all_text.contains("Sites Historiques"));
}

#[test]
fn test_pdf_artifact_is_saved() {
    let artifact = export_itinerary(&kyoto()).unwrap();
    assert_eq!(artifact.file_name, "Evasion_Kyoto.pdf");
    assert!(artifact.bytes.starts_with(b"%PDF-1.4"));
    assert!(artifact.bytes.ends_with(b"%%EOF\n"));

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("guides");
    let path = artifact.write_to(&target).unwrap();

    assert_eq!(path, target.join("Evasion_Kyoto.pdf"));
    assert_eq!(std::fs::read(&path).unwrap(), artifact.bytes);
}

#[test]
fn test_write_to_rejects_a_file_path() {
    let artifact = export_itinerary(&itinerary("Rome", 1)).unwrap();
    let file = tempfile::NamedTempFile::new().unwrap();

    let err = artifact.write_to(file.path()).unwrap_err();
    assert!(matches!(err, PlannerError::Export(_)));
}
