use modpack_build::{AssetStats, BundleStats, SizeReporter};
use owo_colors::OwoColorize;

use super::format::{format_reduction, format_size};

/// Prints UMD artifact sizes to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalSizeReporter {
    quiet: bool,
}

impl TerminalSizeReporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// The lines [`SizeReporter::report`] prints, without colors.
    pub fn lines(unminified: &BundleStats, minified: Option<&BundleStats>) -> Vec<String> {
        let mut lines: Vec<String> = unminified.assets.iter().map(asset_line).collect();

        if let Some(minified) = minified {
            for asset in &minified.assets {
                let mut line = asset_line(asset);
                if let Some(reduction) =
                    format_reduction(unminified.total_size(), minified.total_size())
                {
                    line.push_str(&format!(" ({})", reduction));
                }
                lines.push(line);
            }
        }

        lines
    }
}

fn asset_line(asset: &AssetStats) -> String {
    let path = asset.path.display().to_string();
    match asset.gzip_size {
        Some(gzip) => format!(
            "{:<32} {:>10}  gzip {}",
            path,
            format_size(asset.size),
            format_size(gzip)
        ),
        None => format!("{:<32} {:>10}", path, format_size(asset.size)),
    }
}

impl SizeReporter for TerminalSizeReporter {
    fn report(&self, unminified: &BundleStats, minified: Option<&BundleStats>) {
        if self.quiet {
            return;
        }
        for line in Self::lines(unminified, minified) {
            eprintln!("  {}", line.dimmed());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn stats(file: &str, size: u64) -> BundleStats {
        BundleStats {
            assets: vec![AssetStats {
                name: file.to_string(),
                path: PathBuf::from("umd").join(file),
                size,
                gzip_size: None,
            }],
        }
    }

    #[test]
    fn test_single_report() {
        let lines = TerminalSizeReporter::lines(&stats("widgets.js", 2048), None);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("umd/widgets.js"));
        assert!(lines[0].ends_with("2.00 KB"));
    }

    #[test]
    fn test_comparison_report() {
        let lines = TerminalSizeReporter::lines(
            &stats("widgets.js", 1000),
            Some(&stats("widgets.min.js", 250)),
        );
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("widgets.min.js"));
        assert!(lines[1].ends_with("(-75.0%)"));
    }
}
