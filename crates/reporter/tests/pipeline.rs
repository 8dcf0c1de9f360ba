use configuration::{Config, RunConfig};
use exporter::{JsonPageStore, merge_order};
use reporter::{COMBINED_DOCUMENT_NAME, ReportError, run_density_report, run_report};
use std::path::Path;
use tempfile::TempDir;

const BENCHMARK_CSV: &str = "\
alg,n,k,t,file,min_st
Hopcroft,10,2,100,a.dfa,8
Hopcroft,10,2,200,b.dfa,9
Incremental,10,2,150,a.dfa,7
Hybrid,20,2,300,c.dfa,12
Hopcroft,20,3,400,d.dfa,10
";

const DENSITY_CSV: &str = "\
states,alpha,d,fd,states_dfa,c_h,t_h,c_i,t_i,c_hi,t_hi
8,2,0.1,0.5,10,5,100,5,120,5,90
8,2,0.5,0.5,40,30,200,30,220,30,190
";

fn run_config(dir: &Path, csv: &str) -> RunConfig {
    let input_path = dir.join("input.csv");
    std::fs::write(&input_path, csv).unwrap();
    RunConfig {
        input_path,
        output_directory: dir.join("out"),
    }
}

#[test]
fn report_writes_every_chart_and_the_combined_document() {
    let dir = TempDir::new().unwrap();
    let run = run_config(dir.path(), BENCHMARK_CSV);

    let summary = run_report(&Config::default(), &run, false).unwrap();

    // k=2 and k=3 on the states sweep, n=10 and n=20 on the alphabet sweep,
    // four charts each even where only one algorithm was measured.
    let stems: Vec<String> = summary
        .documents
        .iter()
        .map(|id| {
            Path::new(id.as_str())
                .file_stem()
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    assert_eq!(
        stems,
        vec![
            "time_vs_states_k2",
            "freq_vs_states_k2",
            "ratio_vs_states_k2",
            "timeratio_vs_states_k2",
            "time_vs_states_k3",
            "freq_vs_states_k3",
            "ratio_vs_states_k3",
            "timeratio_vs_states_k3",
            "time_vs_alpha_n10",
            "freq_vs_alpha_n10",
            "ratio_vs_alpha_n10",
            "timeratio_vs_alpha_n10",
            "time_vs_alpha_n20",
            "freq_vs_alpha_n20",
            "ratio_vs_alpha_n20",
            "timeratio_vs_alpha_n20",
        ]
    );
    assert_eq!(summary.documents.len(), 16);
    for id in &summary.documents {
        assert!(Path::new(id.as_str()).is_file(), "{id} was not written");
    }

    let combined = summary.combined.expect("report runs compose a combined document");
    assert!(combined.as_str().ends_with(&format!("{COMBINED_DOCUMENT_NAME}.json")));

    let store = JsonPageStore::new(&run.output_directory);
    let combined = store.load(&combined).unwrap();
    assert_eq!(combined.pages.len(), summary.documents.len());

    let expected_order: Vec<String> = merge_order(&summary.documents)
        .iter()
        .map(|id| store.load(id).unwrap().pages[0].chart.output_id.clone())
        .collect();
    let actual_order: Vec<String> = combined.pages.iter().map(|p| p.chart.output_id.clone()).collect();
    assert_eq!(actual_order, expected_order);
    assert_eq!(actual_order[0], "freq_vs_alpha_n10");
}

#[test]
fn chart_style_from_configuration_is_stored_with_each_page() {
    let dir = TempDir::new().unwrap();
    let run = run_config(dir.path(), BENCHMARK_CSV);
    let mut config = Config::default();
    config.chart.canvas_width = 800;

    let summary = run_report(&config, &run, false).unwrap();

    let store = JsonPageStore::new(&run.output_directory);
    let page = &store.load(&summary.documents[0]).unwrap().pages[0];
    assert_eq!(page.style.canvas_width, 800);
    assert_eq!(page.style.canvas_height, 400);
}

#[test]
fn missing_input_aborts_before_writing_anything() {
    let dir = TempDir::new().unwrap();
    let run = RunConfig {
        input_path: dir.path().join("absent.csv"),
        output_directory: dir.path().join("out"),
    };

    let result = run_report(&Config::default(), &run, false);

    assert!(matches!(result, Err(ReportError::Dataset(_))));
    assert!(!run.output_directory.exists());
}

#[test]
fn unknown_algorithm_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    let run = run_config(dir.path(), "alg,n,k,t,file,min_st\nMoore,10,2,100,a.dfa,8\n");

    let result = run_report(&Config::default(), &run, false);

    assert!(matches!(result, Err(ReportError::Dataset(_))));
    assert!(!run.output_directory.exists());
}

#[test]
fn density_report_writes_two_documents_and_no_combined_one() {
    let dir = TempDir::new().unwrap();
    let run = run_config(dir.path(), DENSITY_CSV);

    let summary = run_density_report(&Config::default(), &run).unwrap();

    assert_eq!(summary.documents.len(), 2);
    assert!(summary.combined.is_none());
    assert!(run.output_directory.join("report_401_compression_vs_density.json").is_file());
    assert!(run.output_directory.join("report_401_dfa_states_vs_density.json").is_file());
    assert!(!run.output_directory.join("charts_combined.json").exists());
}

#[test]
fn single_algorithm_value_still_gets_its_time_ratio_page() {
    let dir = TempDir::new().unwrap();
    let run = run_config(dir.path(), BENCHMARK_CSV);

    let summary = run_report(&Config::default(), &run, false).unwrap();

    // Only Hopcroft was measured with k=3.
    let path = run.output_directory.join("timeratio_vs_states_k3.json");
    assert!(path.is_file());

    let store = JsonPageStore::new(&run.output_directory);
    let combined = store.load(summary.combined.as_ref().unwrap()).unwrap();
    let page = combined
        .pages
        .iter()
        .find(|p| p.chart.output_id == "timeratio_vs_states_k3")
        .expect("time-ratio page in the combined document");
    let labels: Vec<_> = page.chart.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Hybrid/Hopcroft", "Hybrid/Incremental", "Hopcroft/Incremental"]);
    assert!(page.chart.series.iter().all(|s| s.points.is_empty()));
}
