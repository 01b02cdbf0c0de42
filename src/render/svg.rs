//! SVG rendering of a module matrix
//!
//! Three flavors share one coordinate system: the viewBox is measured in
//! modules (one unit per module, quiet zone included) and the `width`/
//! `height` attributes scale it to `module_size` pixels per module. Keeping
//! the drawing coordinates in module units keeps the markup small and exact.

use crate::config::GenerationConfig;
use crate::encoder::ModuleMatrix;
use crate::style::ColorScheme;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Draw one rect per dark module
///
/// With `standalone` the output is a self-contained document with an XML
/// declaration; without it the markup is a fragment meant for embedding in
/// a larger document.
pub fn draw_basic(
    matrix: &ModuleMatrix,
    config: &GenerationConfig,
    colors: &ColorScheme,
    standalone: bool,
) -> String {
    let border = config.quiet_zone() as i64;
    let dark = colors.dark.hex();

    let mut out = String::new();
    if standalone {
        out.push_str(XML_DECLARATION);
    }
    push_open_tag(&mut out, matrix, config);
    for y in 0..matrix.width() as i64 {
        for x in 0..matrix.width() as i64 {
            if matrix.is_dark(x, y) {
                out.push_str(&format!(
                    "  <rect x=\"{}\" y=\"{}\" width=\"1\" height=\"1\" fill=\"{}\"/>\n",
                    x + border,
                    y + border,
                    dark
                ));
            }
        }
    }
    out.push_str("</svg>\n");
    out
}

/// Draw all dark modules as one contiguous path
///
/// A single `<path>` with one `M..h1v1h-1z` subpath per dark module avoids
/// the hairline seams that adjacent rects show at high zoom.
pub fn draw_path(matrix: &ModuleMatrix, config: &GenerationConfig, colors: &ColorScheme) -> String {
    let border = config.quiet_zone() as i64;

    let mut d = String::new();
    for y in 0..matrix.width() as i64 {
        for x in 0..matrix.width() as i64 {
            if matrix.is_dark(x, y) {
                if !d.is_empty() {
                    d.push(' ');
                }
                d.push_str(&format!("M{},{}h1v1h-1z", x + border, y + border));
            }
        }
    }

    let mut out = String::new();
    out.push_str(XML_DECLARATION);
    push_open_tag(&mut out, matrix, config);
    out.push_str(&format!(
        "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        colors.light.hex()
    ));
    out.push_str(&format!("  <path d=\"{}\" fill=\"{}\"/>\n", d, colors.dark.hex()));
    out.push_str("</svg>\n");
    out
}

fn push_open_tag(out: &mut String, matrix: &ModuleMatrix, config: &GenerationConfig) {
    let dim = matrix.width() as u64 + 2 * config.quiet_zone() as u64;
    let px = dim * config.module_size() as u64;
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {dim} {dim}\" width=\"{px}\" height=\"{px}\" stroke=\"none\">\n"
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ErrorLevel;
    use crate::encoder;

    fn matrix() -> ModuleMatrix {
        encoder::encode("HELLO WORLD", ErrorLevel::L).unwrap()
    }

    fn config() -> GenerationConfig {
        GenerationConfig::new(ErrorLevel::L, 10, 4).unwrap()
    }

    #[test]
    fn test_basic_has_one_rect_per_dark_module() {
        let m = matrix();
        let svg = draw_basic(&m, &config(), &ColorScheme::default(), true);
        assert_eq!(svg.matches("<rect").count(), m.dark_count());
    }

    #[test]
    fn test_basic_is_a_standalone_document() {
        let svg = draw_basic(&matrix(), &config(), &ColorScheme::default(), true);
        assert!(svg.starts_with("<?xml version=\"1.0\""));
        assert!(svg.contains("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_fragment_omits_xml_declaration() {
        let svg = draw_basic(&matrix(), &config(), &ColorScheme::default(), false);
        assert!(!svg.contains("<?xml"));
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn test_path_flavor_emits_exactly_one_path() {
        let svg = draw_path(&matrix(), &config(), &ColorScheme::default());
        assert_eq!(svg.matches("<path").count(), 1);
    }

    #[test]
    fn test_path_covers_all_dark_modules() {
        let m = matrix();
        let svg = draw_path(&m, &config(), &ColorScheme::default());
        // one M..z subpath per dark module inside the single path element
        assert_eq!(svg.matches("h1v1h-1z").count(), m.dark_count());
    }

    #[test]
    fn test_viewbox_includes_quiet_zone() {
        let cfg = GenerationConfig::new(ErrorLevel::L, 10, 4).unwrap();
        let svg = draw_path(&matrix(), &cfg, &ColorScheme::default());
        // version 1: 21 modules + 2*4 border = 29 units, 290px at 10px/module
        assert!(svg.contains("viewBox=\"0 0 29 29\""));
        assert!(svg.contains("width=\"290\""));
    }

    #[test]
    fn test_zero_quiet_zone_viewbox() {
        let cfg = GenerationConfig::new(ErrorLevel::L, 1, 0).unwrap();
        let svg = draw_basic(&matrix(), &cfg, &ColorScheme::default(), true);
        assert!(svg.contains("viewBox=\"0 0 21 21\""));
    }

    #[test]
    fn test_custom_colors_in_markup() {
        let scheme = ColorScheme::from_toml(
            r##"
dark = "#112233"
light = "#eeddcc"
"##,
        )
        .unwrap();
        let svg = draw_path(&matrix(), &config(), &scheme);
        assert!(svg.contains("fill=\"#112233\""));
        assert!(svg.contains("fill=\"#eeddcc\""));
    }
}
