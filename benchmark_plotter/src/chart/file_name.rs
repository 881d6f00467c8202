//!
//! Output file names and titles from templates.
//!

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::chart::ChartConfig;
use crate::error::Error;

/// Runs of characters unsafe in file names.
static UNSAFE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9_.\-]+").expect("Always valid")
});

///
/// Replaces characters unsafe in file names with underscores.
///
pub fn sanitize(name: &str) -> String {
    UNSAFE
        .replace_all(name.trim(), "_")
        .trim_matches('_')
        .to_owned()
}

///
/// Fills in the `{grid}` and `{function}` placeholders of a template.
///
/// Fails if the template keeps a placeholder no value was given for.
///
pub fn substitute(template: &str, grid: Option<u64>, function: Option<&str>) -> Result<String, Error> {
    let mut result = template.to_owned();
    if let Some(grid) = grid {
        result = result.replace(ChartConfig::PLACEHOLDER_GRID, grid.to_string().as_str());
    }
    if let Some(function) = function {
        result = result.replace(ChartConfig::PLACEHOLDER_FUNCTION, function);
    }
    for placeholder in [ChartConfig::PLACEHOLDER_GRID, ChartConfig::PLACEHOLDER_FUNCTION] {
        if result.contains(placeholder) {
            return Err(Error::Template {
                template: template.to_owned(),
                reason: format!("no value for the `{placeholder}` placeholder"),
            });
        }
    }
    Ok(result)
}

///
/// Builds an output file name from a template, sanitizing the function name.
///
pub fn file_name(template: &str, grid: Option<u64>, function: Option<&str>) -> Result<String, Error> {
    let function = function.map(sanitize);
    substitute(template, grid, function.as_deref())
}

#[cfg(test)]
mod tests {
    #[test]
    fn sanitize() {
        assert_eq!(super::sanitize("solve (red, black)"), "solve_red_black");
        assert_eq!(super::sanitize("jacobi_v2.1"), "jacobi_v2.1");
        assert_eq!(super::sanitize("a/b\\c"), "a_b_c");
    }

    #[test]
    fn file_name() {
        assert_eq!(
            super::file_name("speedup_{function}_{grid}.png", Some(1024), Some("gauss seidel"))
                .expect("Always valid"),
            "speedup_gauss_seidel_1024.png"
        );
    }

    #[test]
    fn missing_value() {
        assert!(super::file_name("speedup_{function}.png", Some(1024), None).is_err());
    }

    #[test]
    fn title_keeps_function_name() {
        assert_eq!(
            super::substitute("Speedup of {function}", None, Some("solve (red, black)"))
                .expect("Always valid"),
            "Speedup of solve (red, black)"
        );
    }
}
