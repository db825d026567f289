// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! End-to-end: probe signals through detection, scoring and ranking.

use std::io::Write;

use llm_checker::hardware::gpu::{NVIDIA_SMI, ROCM_SMI};
use llm_checker::hardware::{
    BackendKind, CpuSignals, HardwareDetector, HardwareTier, SimdTier, StaticProbe, ToolResponse,
};
use llm_checker::models::{builtin_models, ModelCatalogue, ModelDescriptor};
use llm_checker::scoring::{categorize, rank, Scorer, UseCase};

fn cpu_only_32gb() -> StaticProbe {
    StaticProbe::new()
        .with_cpu(Some(CpuSignals {
            brand: "Example 8-Core".to_string(),
            physical_cores: 8,
            logical_cores: 16,
            frequency_mhz: 4200,
        }))
        .with_feature_text(Some("flags : fpu sse4_2 avx avx2"))
        .with_ram_gb(32.0)
}

#[test]
fn test_cpu_only_end_to_end() {
    let profile = HardwareDetector::with_probe(cpu_only_32gb()).detect();
    assert_eq!(profile.cpu.simd, SimdTier::Avx2);
    assert_eq!(profile.summary.speed_coefficient, 40.0);
    assert_eq!(profile.backend.kind, BackendKind::Cpu);
    assert_eq!(profile.summary.max_model_size_gb, 22.4);

    let model = ModelDescriptor::new("mistral:7b-custom", "mistral", 7.0, 15.0, "Q4_K_M", 32768);
    let result = Scorer::new()
        .score(&model, &profile, UseCase::General)
        .unwrap();
    assert!(result.will_fit);

    let speed = 19.7f64.log10() / 2.0 * 100.0;
    let fit = 50.0 + (15.0 / 22.4) / 0.7 * 50.0;
    let expected = 84.0 * 0.40 + speed * 0.35 + fit * 0.15 + 100.0 * 0.10;
    assert!((result.scores.final_score - expected).abs() < 0.05);
}

#[test]
fn test_tier_ladder_top_down() {
    assert_eq!(HardwareTier::classify(80.0, 300.0), HardwareTier::UltraHigh);
    assert_eq!(HardwareTier::classify(80.0, 299.0), HardwareTier::VeryHigh);
    assert_eq!(HardwareTier::classify(1.0, 1000.0), HardwareTier::UltraLow);
}

#[test]
fn test_nvidia_preferred_over_faster_amd() {
    let probe = cpu_only_32gb()
        .with_tool(
            NVIDIA_SMI,
            ToolResponse::Output("Quadro P2000, 5120\n".to_string()),
        )
        .with_tool(ROCM_SMI, ToolResponse::Output("GPU[0] : Card series".to_string()));
    let profile = HardwareDetector::with_probe(probe).detect();

    assert_eq!(profile.backend.kind, BackendKind::Cuda);
    assert_eq!(profile.backend.speed, 100.0);
    assert_eq!(profile.summary.speed_coefficient, 100.0);
    assert_eq!(profile.summary.max_model_size_gb, 3.0);
    assert!(profile.gpu.amd.as_ref().is_some_and(|amd| amd.estimated));
}

#[test]
fn test_missing_tools_fall_back_to_cpu() {
    let probe = cpu_only_32gb()
        .with_tool(NVIDIA_SMI, ToolResponse::Failed)
        .with_tool(ROCM_SMI, ToolResponse::TimedOut);
    let profile = HardwareDetector::with_probe(probe).detect();
    assert!(!profile.gpu.has_gpu);
    assert_eq!(profile.backend.kind, BackendKind::Cpu);
}

#[test]
fn test_recommendations_fit_and_are_sorted() {
    let profile = HardwareDetector::with_probe(cpu_only_32gb()).detect();
    for use_case in UseCase::all() {
        let ranked = rank(&builtin_models(), &profile, *use_case, 10);
        assert_eq!(ranked.len(), 10);
        assert!(ranked.iter().all(|r| r.model.size_gb <= 22.4));
        for pair in ranked.windows(2) {
            assert!(pair[0].scores.final_score >= pair[1].scores.final_score);
        }
        let categories = categorize(&ranked);
        assert_eq!(
            categories.best_overall.map(|r| &r.model.name),
            Some(&ranked[0].model.name)
        );
    }
}

#[test]
fn test_coding_bonus_lifts_coder_variant() {
    let profile = HardwareDetector::with_probe(cpu_only_32gb()).detect();
    let catalogue = ModelCatalogue::builtin();
    let pair = [
        catalogue.find("qwen2.5:7b-instruct-q4_k_m").unwrap().clone(),
        catalogue.find("qwen2.5-coder:7b-instruct-q4_k_m").unwrap().clone(),
    ];
    let ranked = rank(&pair, &profile, UseCase::Coding, 2);
    assert_eq!(ranked[0].model.family, "qwen2.5-coder");
    assert_eq!(ranked[0].scores.quality, 100.0);
    assert_eq!(ranked[1].scores.quality, 94.0);
}

#[test]
fn test_tiny_machine_gets_empty_or_small_list() {
    let probe = StaticProbe::new().with_ram_gb(1.0);
    let profile = HardwareDetector::with_probe(probe).detect();
    assert_eq!(profile.summary.max_model_size_gb, 0.7);

    let ranked = rank(&builtin_models(), &profile, UseCase::General, 5);
    assert!(ranked.iter().all(|r| r.model.size_gb <= 0.7));
    assert!(rank(&[], &profile, UseCase::General, 5).is_empty());
}

#[test]
fn test_context_floor_and_ceiling() {
    let profile = HardwareDetector::with_probe(cpu_only_32gb()).detect();
    let scorer = Scorer::new();
    let short = ModelDescriptor::new("a:1b", "tinyllama", 1.1, 0.8, "Q4_K_M", 2048);
    let long = ModelDescriptor::new("b:8b", "llama3.1", 8.0, 5.0, "Q4_K_M", 131072);
    assert_eq!(
        scorer.score(&short, &profile, UseCase::General).unwrap().scores.context,
        30.0
    );
    assert_eq!(
        scorer.score(&long, &profile, UseCase::General).unwrap().scores.context,
        100.0
    );
}

#[test]
fn test_catalogue_file_drives_ranking() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
[[models]]
name = "custom:3b-q4_k_m"
params_b = 3
size_gb = 2.0
quantization = "Q4_K_M"
context_length = 8192

[[models]]
name = "missing-fields"
"#
    )
    .unwrap();

    let catalogue = ModelCatalogue::load(Some(file.path())).unwrap();
    assert_eq!(catalogue.len(), 1);
    assert_eq!(catalogue.models()[0].family, "custom");

    let profile = HardwareDetector::with_probe(cpu_only_32gb()).detect();
    let ranked = rank(catalogue.models(), &profile, UseCase::General, 5);
    assert_eq!(ranked.len(), 1);
}
