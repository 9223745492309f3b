use std::error::Error;
use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use image::{ImageBuffer, Rgb};
use tempfile::{tempdir, TempDir};

/// Writes a 100x80 gradient PNG and the given metadata into a fresh directory.
fn setup(metadata: &str) -> Result<(TempDir, PathBuf, PathBuf), Box<dyn Error>> {
    let work_dir = tempdir()?;
    let image_path = work_dir.path().join("fish.png");
    let metadata_path = work_dir.path().join("fish.json");

    let img = ImageBuffer::from_fn(100, 80, |x, y| Rgb([x as u8, y as u8, 200u8]));
    img.save(&image_path)?;
    fs::write(&metadata_path, metadata)?;

    Ok((work_dir, image_path, metadata_path))
}

fn run_cli<I, S>(args: I, extra: &[&str]) -> Result<std::process::Output, Box<dyn Error>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = cargo_bin_cmd!("fishcrop");
    cmd.args(args).args(extra).env("RUST_LOG", "info");
    Ok(cmd.output()?)
}

#[test]
fn crop_writes_padded_region() -> Result<(), Box<dyn Error>> {
    let (dir, image_path, metadata_path) =
        setup(r#"{"fish": {"fish_num": 1, "bbox": [40, 30, 60, 50]}}"#)?;
    let output = dir.path().join("crop.png");

    let result = run_cli([&image_path, &metadata_path, &output], &["--increase", "0.1"])?;
    assert!(
        result.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&result.stderr)
    );

    let crop = image::open(&output)?.to_rgb8();
    assert_eq!(crop.dimensions(), (22, 22));
    assert_eq!(crop.get_pixel(0, 0).0, [39, 29, 200]);
    Ok(())
}

#[test]
fn default_increase_is_five_percent() -> Result<(), Box<dyn Error>> {
    let (dir, image_path, metadata_path) =
        setup(r#"{"fish": {"fish_num": 1, "bbox": [20, 20, 60, 60]}}"#)?;
    let output = dir.path().join("crop.png");

    // margin per side = 40 * 0.05 / 2 = 1
    let result = run_cli([&image_path, &metadata_path, &output], &[])?;
    assert!(result.status.success());
    assert_eq!(image::open(&output)?.to_rgb8().dimensions(), (42, 42));
    Ok(())
}

#[test]
fn no_detection_writes_placeholder_and_succeeds() -> Result<(), Box<dyn Error>> {
    let (dir, image_path, metadata_path) = setup(r#"{"fish": {"fish_num": 0}}"#)?;
    let output = dir.path().join("crop.png");

    let result = run_cli([&image_path, &metadata_path, &output], &[])?;
    assert!(result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("No bounding box available"), "stderr: {stderr}");

    let placeholder = image::open(&output)?.to_rgb8();
    assert_eq!(placeholder.dimensions(), (100, 80));
    assert!(placeholder.pixels().all(|p| p.0 == [0, 0, 0]));
    Ok(())
}

#[test]
fn has_fish_schema_flag() -> Result<(), Box<dyn Error>> {
    let (dir, image_path, metadata_path) = setup(
        r#"{"fish.png": {"has_fish": true, "fish": [{"bbox": [0, 0, 10, 10]}]}}"#,
    )?;
    let output = dir.path().join("crop.png");

    let result = run_cli(
        [&image_path, &metadata_path, &output],
        &["--schema", "has-fish", "--increase", "0.2"],
    )?;
    assert!(result.status.success());
    assert_eq!(image::open(&output)?.to_rgb8().dimensions(), (11, 11));
    Ok(())
}

#[test]
fn config_file_supplies_defaults() -> Result<(), Box<dyn Error>> {
    let (dir, image_path, metadata_path) =
        setup(r#"{"img": {"has_fish": true, "fish": [{"bbox": [40, 30, 60, 50]}]}}"#)?;
    let config = dir.path().join("settings.json");
    fs::write(&config, r#"{"schema": "has-fish", "increase": 0.1}"#)?;
    let output = dir.path().join("crop.png");

    let result = run_cli(
        [&image_path, &metadata_path, &output],
        &["--config", config.to_str().unwrap()],
    )?;
    assert!(
        result.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    assert_eq!(image::open(&output)?.to_rgb8().dimensions(), (22, 22));
    Ok(())
}

#[test]
fn malformed_metadata_fails_without_output() -> Result<(), Box<dyn Error>> {
    let (dir, image_path, metadata_path) = setup(r#"{"fish": {"bbox": [1, 2, 3, 4]}}"#)?;
    let output = dir.path().join("crop.png");

    let result = run_cli([&image_path, &metadata_path, &output], &[])?;
    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("malformed metadata"), "stderr: {stderr}");
    assert!(!output.exists());
    Ok(())
}

#[test]
fn missing_arguments_print_usage() -> Result<(), Box<dyn Error>> {
    let mut cmd = cargo_bin_cmd!("fishcrop");
    let result = cmd.arg("only_one.jpg").output()?;
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("Usage"));
    Ok(())
}

#[test]
fn negative_increase_is_rejected() -> Result<(), Box<dyn Error>> {
    let (dir, image_path, metadata_path) =
        setup(r#"{"fish": {"fish_num": 1, "bbox": [40, 30, 60, 50]}}"#)?;
    let output = dir.path().join("crop.png");

    let result = run_cli([&image_path, &metadata_path, &output], &["--increase=-0.5"])?;
    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("Increase must be"));
    Ok(())
}

#[test]
fn missing_input_image_is_error() -> Result<(), Box<dyn Error>> {
    let (dir, _image_path, metadata_path) = setup(r#"{"fish": {"fish_num": 0}}"#)?;
    let missing = dir.path().join("missing.jpg");
    let output = dir.path().join("crop.png");

    let result = run_cli([&missing, &metadata_path, &output], &[])?;
    assert_eq!(result.status.code(), Some(1));
    Ok(())
}

/// Writes a noisy JPEG cut halfway through its scan data.
fn write_cut_jpeg(dir: &std::path::Path) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.join("cut.jpg");
    let img = ImageBuffer::from_fn(256, 192, |x, y| {
        Rgb([(x * 7 + y * 3) as u8, (x ^ y) as u8, (x * y) as u8])
    });
    img.save(&path)?;
    let bytes = fs::read(&path)?;
    fs::write(&path, &bytes[..bytes.len() / 2])?;
    Ok(path)
}

#[test]
fn truncated_jpeg_is_cropped_by_default() -> Result<(), Box<dyn Error>> {
    let (dir, _image_path, metadata_path) =
        setup(r#"{"fish": {"fish_num": 1, "bbox": [40, 30, 60, 50]}}"#)?;
    let cut = write_cut_jpeg(dir.path())?;
    let output = dir.path().join("crop.png");

    let result = run_cli([&cut, &metadata_path, &output], &["--increase", "0.1"])?;
    assert!(
        result.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    assert_eq!(image::open(&output)?.to_rgb8().dimensions(), (22, 22));
    Ok(())
}

#[test]
fn reject_truncated_fails_on_cut_jpeg() -> Result<(), Box<dyn Error>> {
    let (dir, _image_path, metadata_path) =
        setup(r#"{"fish": {"fish_num": 1, "bbox": [40, 30, 60, 50]}}"#)?;
    let cut = write_cut_jpeg(dir.path())?;
    let output = dir.path().join("crop.png");

    let result = run_cli([&cut, &metadata_path, &output], &["--reject-truncated"])?;
    assert_eq!(result.status.code(), Some(1));
    assert!(!output.exists());
    Ok(())
}
