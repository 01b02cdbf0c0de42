//! Cross-strategy checks on the generated SVG markup

use qrgen::encoder;
use qrgen::{generate_with_options, Artifact, ErrorLevel, GenerateOptions, RenderStrategy};

fn svg_for(payload: &str, strategy: RenderStrategy) -> String {
    let options = GenerateOptions::new().with_strategy(strategy);
    match generate_with_options(payload, &options).unwrap() {
        Artifact::Vector(markup) => markup,
        Artifact::Raster(_) => panic!("expected vector artifact for {:?}", strategy),
    }
}

#[test]
fn test_path_strategy_emits_a_single_path_element() {
    let svg = svg_for("https://example.com", RenderStrategy::VectorPath);
    assert_eq!(svg.matches("<path").count(), 1);
}

#[test]
fn test_basic_strategy_emits_one_rect_per_dark_module() {
    let payload = "https://example.com";
    let matrix = encoder::encode(payload, ErrorLevel::M).unwrap();
    let svg = svg_for(payload, RenderStrategy::VectorBasic);
    assert_eq!(svg.matches("<rect").count(), matrix.dark_count());
}

#[test]
fn test_fragment_matches_basic_except_for_the_declaration() {
    let basic = svg_for("embed me", RenderStrategy::VectorBasic);
    let fragment = svg_for("embed me", RenderStrategy::VectorFragment);

    assert!(basic.starts_with("<?xml"));
    assert!(!fragment.contains("<?xml"));
    assert_eq!(
        basic.lines().skip(1).collect::<Vec<_>>(),
        fragment.lines().collect::<Vec<_>>()
    );
}

#[test]
fn test_path_subpaths_cover_every_dark_module() {
    let payload = "coverage";
    let matrix = encoder::encode(payload, ErrorLevel::M).unwrap();
    let svg = svg_for(payload, RenderStrategy::VectorPath);
    assert_eq!(svg.matches("h1v1h-1z").count(), matrix.dark_count());
}

#[test]
fn test_vector_output_is_deterministic() {
    for strategy in [
        RenderStrategy::VectorBasic,
        RenderStrategy::VectorFragment,
        RenderStrategy::VectorPath,
    ] {
        let a = svg_for("stable", strategy);
        let b = svg_for("stable", strategy);
        assert_eq!(a, b, "strategy {:?} not deterministic", strategy);
    }
}
