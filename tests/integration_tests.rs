use menu_extract::core::Pipeline;
use menu_extract::{
    CliConfig, ExtractionEngine, ExtractionMode, InputFormat, LocalStorage, MenuError,
    MenuPipeline, TomlConfig,
};
use tempfile::TempDir;

fn cli_config(inputs: Vec<String>, output_path: &str) -> CliConfig {
    CliConfig {
        inputs,
        output_path: output_path.to_string(),
        mode: ExtractionMode::Heuristic,
        input_format: InputFormat::Auto,
        formats: vec!["json".to_string()],
        max_lines: None,
        compress: false,
        monitor: false,
        verbose: false,
    }
}

fn path_str(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().into_owned()
}

#[tokio::test]
async fn test_end_to_end_text_and_json_inputs() {
    let temp_dir = TempDir::new().unwrap();
    let board = path_str(&temp_dir, "board.txt");
    let payload = path_str(&temp_dir, "specials.json");
    let output_path = path_str(&temp_dir, "output");

    std::fs::write(
        &board,
        "STARTERS\n1. Paneer Tikka    \u{20B9}180/-\nTea, Coffee, Lassi\n123456\n",
    )
    .unwrap();
    std::fs::write(
        &payload,
        r#"{"lines": ["VEG SNACKS", "2) Chicken Biryani - spicy rice dish"]}"#,
    )
    .unwrap();

    let mut config = cli_config(vec![board.clone(), payload.clone()], &output_path);
    config.formats = vec!["json".to_string(), "csv".to_string()];

    let storage = LocalStorage::new(".".to_string());
    let pipeline = MenuPipeline::new(storage, config);
    let engine = ExtractionEngine::new_with_monitoring(pipeline, false);

    let summary = engine.run().await.unwrap();
    assert_eq!(summary.documents, 2);
    assert_eq!(summary.items, 5);
    assert!(summary.output_path.ends_with("menu_items.json"));

    let json_text = std::fs::read_to_string(&summary.output_path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&json_text).unwrap();
    assert_eq!(json["mode"], "heuristic");

    let first = &json["documents"][0];
    assert_eq!(first["source"], board.as_str());
    assert_eq!(first["line_count"], 4);
    let names: Vec<&str> = first["candidates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Paneer Tikka", "Tea", "Coffee", "Lassi"]);

    let second = &json["documents"][1]["candidates"][0];
    assert_eq!(second["id"], "0");
    assert_eq!(second["name"], "Chicken Biryani");

    let csv_text = std::fs::read_to_string(temp_dir.path().join("output/menu_items.csv")).unwrap();
    assert!(csv_text.starts_with("source,id,name,original,score\n"));
    assert!(csv_text.contains("\"Tea, Coffee, Lassi\""));
}

#[tokio::test]
async fn test_end_to_end_simple_mode_with_zip() {
    let temp_dir = TempDir::new().unwrap();
    let input = path_str(&temp_dir, "clean.txt");
    let output_path = path_str(&temp_dir, "output");

    std::fs::write(&input, "Margherita $12\nMargherita $12\nx\nTiramisu 6 EUR\n").unwrap();

    let mut config = cli_config(vec![input], &output_path);
    config.mode = ExtractionMode::Simple;
    config.formats = vec!["csv".to_string(), "tsv".to_string()];
    config.compress = true;

    let pipeline = MenuPipeline::new(LocalStorage::new(".".to_string()), config);
    let summary = ExtractionEngine::new(pipeline).run().await.unwrap();
    assert_eq!(summary.items, 2);
    assert!(summary.output_path.ends_with("menu_items.zip"));

    let zip_data = std::fs::read(&summary.output_path).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();
    assert_eq!(archive.len(), 2);

    let mut csv_content = String::new();
    std::io::Read::read_to_string(
        &mut archive.by_name("menu_items.csv").unwrap(),
        &mut csv_content,
    )
    .unwrap();

    let rows: Vec<&str> = csv_content.lines().collect();
    assert_eq!(rows[0], "source,id,text");
    assert!(rows[1].ends_with(",0,Margherita"));
    assert!(rows[2].ends_with(",3,Tiramisu"));
    assert_eq!(rows.len(), 3);
}

#[tokio::test]
async fn test_missing_input_fails_with_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let config = cli_config(
        vec![path_str(&temp_dir, "nope.txt")],
        &path_str(&temp_dir, "output"),
    );

    let pipeline = MenuPipeline::new(LocalStorage::new(".".to_string()), config);
    let err = ExtractionEngine::new(pipeline).run().await.unwrap_err();
    assert!(matches!(err, MenuError::IoError(_)));
    assert_eq!(err.exit_code(), 2);
    assert!(!temp_dir.path().join("output").exists());
}

#[tokio::test]
async fn test_malformed_json_payload_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let input = path_str(&temp_dir, "scan.json");
    std::fs::write(&input, r#"{"lines": "Idli"}"#).unwrap();

    let config = cli_config(vec![input], &path_str(&temp_dir, "output"));
    let pipeline = MenuPipeline::new(LocalStorage::new(".".to_string()), config);

    let err = pipeline.extract().await.unwrap_err();
    assert!(matches!(err, MenuError::InputFormatError { .. }));
}

#[tokio::test]
async fn test_toml_config_drives_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let input = path_str(&temp_dir, "board.txt");
    std::fs::write(&input, "Masala Dosa\nPongal\nKesari Bath\n").unwrap();

    let normalized_dir = temp_dir.path().to_string_lossy().replace('\\', "/");
    let toml_content = format!(
        r#"
[pipeline]
name = "board"
version = "1.0.0"

[source]
files = ["{dir}/board.txt"]

[extract]
max_lines = 2

[load]
output_path = "{dir}/out"
output_formats = ["tsv"]

[load.filenames]
tsv = "board.tsv"
"#,
        dir = normalized_dir
    );

    let config_path = temp_dir.path().join("menu-extract.toml");
    std::fs::write(&config_path, toml_content).unwrap();

    let config = TomlConfig::from_file(&config_path).unwrap();
    let pipeline = MenuPipeline::new(LocalStorage::new(".".to_string()), config);
    let summary = ExtractionEngine::new(pipeline).run().await.unwrap();

    assert_eq!(summary.items, 2);
    assert!(summary.output_path.ends_with("board.tsv"));

    let tsv = std::fs::read_to_string(&summary.output_path).unwrap();
    assert!(tsv.contains("\tMasala Dosa\t"));
    assert!(tsv.contains("\tPongal\t"));
    assert!(!tsv.contains("Kesari Bath"));
}
