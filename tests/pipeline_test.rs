//! パイプラインテスト
//!
//! scores / simPlaces を読み込んで描画するまでの一連の動作を検証

use costview::config::Config;
use costview::pipeline::{load_inputs, render_cost_matrix, render_inputs, Verbosity};
use costview::render::save_png;
use std::path::Path;
use tempfile::tempdir;

fn write_inputs(dir: &Path, scores: &str, sim_places: &str) {
    std::fs::write(dir.join("scores.txt"), scores).unwrap();
    std::fs::write(dir.join("vggSim.txt"), sim_places).unwrap();
}

fn config_for(dir: &Path, traj_size: usize) -> Config {
    Config {
        folder: dir.to_path_buf(),
        traj_size,
        ..Default::default()
    }
}

/// 4x4の例: 正規化値とハイライトの上書き
#[test]
fn test_end_to_end_small_matrix() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_inputs(dir.path(), "0 1 5.0\n1 2 10.0\n2 3 0.0\n", "0 1\n");

    let rendered = render_cost_matrix(&config_for(dir.path(), 4), Verbosity::Quiet).unwrap();
    let image = &rendered.image;
    assert_eq!(image.dimensions(), (4, 4));

    // (row 1, col 2) は最大値
    assert_eq!(image.get_pixel(2, 1).0, [255, 255, 255]);
    // (row 2, col 3) は最小値
    assert_eq!(image.get_pixel(3, 2).0, [0, 0, 0]);
    // (row 0, col 1) は 128 のはずだがハイライトで上書きされる
    assert_eq!(image.get_pixel(1, 0).0, [255, 0, 0]);
    // 未設定セル
    assert_eq!(image.get_pixel(0, 3).0, [0, 0, 0]);

    assert_eq!(rendered.summary.records, 3);
    assert_eq!(rendered.summary.populated, 2);
    assert_eq!(rendered.summary.min_score, Some(0.0));
    assert_eq!(rendered.summary.max_score, Some(10.0));
    assert_eq!(rendered.summary.highlights, 1);
    assert!(!rendered.summary.degenerate);
}

/// ハイライトなしなら補間値がそのまま残る
#[test]
fn test_interpolated_value_without_highlight() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_inputs(dir.path(), "0 1 5.0\n1 2 10.0\n2 3 0.0\n", "");

    let rendered = render_cost_matrix(&config_for(dir.path(), 4), Verbosity::Quiet).unwrap();
    assert_eq!(rendered.image.get_pixel(1, 0).0, [128, 128, 128]);
    assert_eq!(rendered.summary.highlights, 0);
}

/// すべての画素で3チャンネルが等しい（ハイライト以外）
#[test]
fn test_channels_are_replicated() {
    let dir = tempdir().expect("Failed to create temp dir");
    let scores: String = (0..6)
        .flat_map(|r| (0..6).map(move |c| format!("{r} {c} {}\n", (r * 7 + c * 3) % 11)))
        .collect();
    write_inputs(dir.path(), &scores, "");

    let rendered = render_cost_matrix(&config_for(dir.path(), 6), Verbosity::Quiet).unwrap();
    for px in rendered.image.pixels() {
        let [r, g, b] = px.0;
        assert_eq!(r, g);
        assert_eq!(g, b);
    }
}

/// 全セル同値（スコアなし）でも落ちない
#[test]
fn test_degenerate_matrix_renders_black() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_inputs(dir.path(), "", "2 2\n");

    let rendered = render_cost_matrix(&config_for(dir.path(), 3), Verbosity::Quiet).unwrap();
    assert!(rendered.summary.degenerate);
    assert_eq!(rendered.summary.min_score, None);
    for (x, y, px) in rendered.image.enumerate_pixels() {
        let expected = if (x, y) == (2, 2) { [255, 0, 0] } else { [0, 0, 0] };
        assert_eq!(px.0, expected, "mismatch at ({x}, {y})");
    }
}

/// 重複座標は後勝ち
#[test]
fn test_duplicate_scores_last_wins() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_inputs(dir.path(), "0 0 10.0\n1 1 1.0\n1 1 10.0\n", "");

    let inputs = load_inputs(&config_for(dir.path(), 2), Verbosity::Quiet).unwrap();
    assert_eq!(inputs.scores.matrix.get(1, 1), Some(10.0));
    assert_eq!(inputs.scores.min_score, Some(1.0));
}

/// ハイライト色は設定で変更できる
#[test]
fn test_custom_highlight_color() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_inputs(dir.path(), "0 0 1.0\n", "1 0\n1 0\n");

    let config = Config {
        highlight_color: [0, 255, 0],
        ..config_for(dir.path(), 2)
    };
    let inputs = load_inputs(&config, Verbosity::Quiet).unwrap();
    let rendered = render_inputs(inputs, &config, Verbosity::Quiet).unwrap();
    assert_eq!(rendered.image.get_pixel(0, 1).0, [0, 255, 0]);
    assert_eq!(rendered.summary.highlights, 2);
}

/// PNG保存後に読み直しても画素が一致する
#[test]
fn test_save_png_roundtrip() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_inputs(dir.path(), "0 1 5.0\n1 2 10.0\n", "2 0\n");

    let rendered = render_cost_matrix(&config_for(dir.path(), 3), Verbosity::Quiet).unwrap();
    let out = dir.path().join("out").join("costs.png");
    save_png(&rendered.image, &out).unwrap();

    let reloaded = image::open(&out).unwrap().to_rgb8();
    assert_eq!(reloaded, rendered.image);
}
