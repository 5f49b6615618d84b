//! Tests for command-line parsing and batch shape processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use gridshape::ShapeError;
    use gridshape::io::cli::{Cli, FileProcessor};
    use std::fs;
    use std::path::{Path, PathBuf};

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("gridshape").chain(args.iter().copied()))
    }

    fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        if let Err(error) = fs::write(&path, text) {
            unreachable!("failed to write {}: {error}", path.display());
        }
        path
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap_or_default()
    }

    fn temp_dir() -> tempfile::TempDir {
        match tempfile::tempdir() {
            Ok(dir) => dir,
            Err(error) => unreachable!("failed to create temp dir: {error}"),
        }
    }

    // Tests CLI parsing with only the required target argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = cli(&["shape.txt"]);
        assert_eq!(cli.target, PathBuf::from("shape.txt"));
        assert_eq!(cli.extrude_x, 0);
        assert_eq!(cli.extrude_y, 0);
        assert!(!cli.extrudes());
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    // Verified by renaming the long flags
    #[test]
    fn test_cli_parse_all_args() {
        let cli = cli(&[
            "shapes",
            "--extrude-x",
            "2",
            "-y",
            "1",
            "--list",
            "--invert-y",
            "--quiet",
            "--no-skip",
        ]);
        assert_eq!(cli.target, PathBuf::from("shapes"));
        assert_eq!((cli.extrude_x, cli.extrude_y), (2, 1));
        assert!(cli.extrudes());
        assert!(cli.list && cli.invert_y);
        assert!(!cli.should_show_progress());
        assert!(!cli.skip_existing());
    }

    // Tests a single file is extruded and written next to the input
    // Verified by writing the unextruded shape
    #[test]
    fn test_process_single_file() {
        let dir = temp_dir();
        let input = write(dir.path(), "dot.txt", "000\n010\n000\n");
        let target = input.to_string_lossy().into_owned();

        let mut processor = FileProcessor::new(cli(&[&target, "-x", "1", "-y", "1", "-q"]));
        let reports = processor.process().unwrap_or_default();

        assert_eq!(reports.len(), 1);
        let output = FileProcessor::get_output_path(&input);
        assert_eq!(output, dir.path().join("dot_result.txt"));
        assert_eq!(read(&output), "010\n111\n010\n");
        assert_eq!(reports.first().map(|report| report.shape.active_count()), Some(5));
    }

    // Tests directory processing skips existing outputs and non-shape files
    // Verified by inverting the skip check
    #[test]
    fn test_process_directory_skips_existing() {
        let dir = temp_dir();
        write(dir.path(), "a.txt", "11\n");
        write(dir.path(), "b.txt", "01\n");
        write(dir.path(), "b_result.txt", "stale\n");
        write(dir.path(), "notes.md", "11\n");
        let target = dir.path().to_string_lossy().into_owned();

        let mut processor = FileProcessor::new(cli(&[&target, "-q"]));
        let reports = processor.process().unwrap_or_default();
        let inputs: Vec<_> = reports.iter().map(|report| report.input.clone()).collect();
        assert_eq!(inputs, vec![dir.path().join("a.txt")]);
        assert_eq!(read(&dir.path().join("b_result.txt")), "stale\n");

        let mut processor = FileProcessor::new(cli(&[&target, "-q", "--no-skip"]));
        let reports = processor.process().unwrap_or_default();
        assert_eq!(reports.len(), 2);
        assert_eq!(read(&dir.path().join("b_result.txt")), "01\n");
    }

    // Tests invalid targets and oversized shapes surface as errors
    // Verified by returning an empty batch for bad targets
    #[test]
    fn test_process_errors() {
        let dir = temp_dir();
        let wrong = write(dir.path(), "shape.png", "11\n");
        let mut processor =
            FileProcessor::new(cli(&[&wrong.to_string_lossy(), "-q"]));
        assert!(matches!(
            processor.process(),
            Err(ShapeError::InvalidParameter { .. })
        ));

        let big = write(dir.path(), "big.txt", &format!("{}\n", "1".repeat(257)));
        let mut processor = FileProcessor::new(cli(&[&big.to_string_lossy(), "-q"]));
        assert!(matches!(
            processor.process(),
            Err(ShapeError::CapacityExceeded { .. })
        ));

        let mut processor = FileProcessor::new(cli(&[&big.to_string_lossy(), "-x", "999", "-q"]));
        assert!(matches!(
            processor.process(),
            Err(ShapeError::InvalidParameter {
                parameter: "extrude-x",
                ..
            })
        ));

        let missing = dir.path().join("missing");
        let mut processor = FileProcessor::new(cli(&[&missing.to_string_lossy(), "-q"]));
        assert!(processor.process().is_err());
    }
}
