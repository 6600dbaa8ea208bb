mod common;

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, Rgba, RgbaImage};

use common::{MINIMAL_MAP, MapTree, spawn_command, stderr, stdout};

fn map_with_png(width: u32, height: u32) -> String {
    let img = RgbaImage::from_pixel(width, height, Rgba([10, 80, 160, 255]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    format!(r#"{{"image": "{}"}}"#, STANDARD.encode(buf.into_inner()))
}

#[test]
fn writes_preview_next_to_map() {
    let tree = MapTree::new();
    tree.write("forest/glade.dd2vtt", &map_with_png(128, 64));

    let output = spawn_command(&["thumbnail", "--scale", "8", tree.root_arg()]);
    assert!(output.status.success(), "{}", stderr(&output));

    let preview = image::open(tree.root().join("forest/glade.preview.png")).unwrap();
    assert_eq!((preview.width(), preview.height()), (16, 8));
    assert!(stdout(&output).contains("1 written"));
}

#[test]
fn existing_preview_kept_without_force() {
    let tree = MapTree::new();
    tree.write("glade.dd2vtt", &map_with_png(32, 32));
    tree.write("glade.preview.png", "placeholder");

    let output = spawn_command(&["thumbnail", tree.root_arg()]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(tree.read("glade.preview.png"), "placeholder");

    let forced = spawn_command(&["thumbnail", "--force", tree.root_arg()]);
    assert!(forced.status.success(), "{}", stderr(&forced));
    assert!(image::open(tree.root().join("glade.preview.png")).is_ok());
}

#[test]
fn non_image_payload_fails() {
    let tree = MapTree::new();
    tree.write("text.dd2vtt", MINIMAL_MAP);

    let output = spawn_command(&["thumbnail", "--fail-fast", tree.root_arg()]);
    assert_eq!(output.status.code(), Some(4), "{}", stderr(&output));
    assert!(!tree.exists("text.preview.png"));
}

#[test]
fn zero_scale_rejected() {
    let tree = MapTree::new();
    let output = spawn_command(&["thumbnail", "--scale", "0", tree.root_arg()]);
    assert_eq!(output.status.code(), Some(64));
}
