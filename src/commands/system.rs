// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! System hardware information command

use std::io::Write;

use serde::Serialize;

use super::{detect_profile, write_heading, write_json};
use crate::cli::args::{OutputFormat, SystemArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::hardware::{HardwareProfile, VendorGpu};

#[derive(Debug, Serialize)]
struct QuantizationAdvice {
    params_b: f64,
    recommended: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct SystemReport<'a> {
    #[serde(flatten)]
    profile: &'a HardwareProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantizations: Option<QuantizationAdvice>,
}

/// Execute the system command
pub fn execute(args: &SystemArgs, format: OutputFormat, settings: &Settings) -> Result<()> {
    let profile = detect_profile(settings);
    let mut stdout = std::io::stdout().lock();
    render(&mut stdout, &profile, args, format)
}

pub fn render<W: Write>(
    out: &mut W,
    profile: &HardwareProfile,
    args: &SystemArgs,
    format: OutputFormat,
) -> Result<()> {
    let quantizations = args.quantizations.map(|params_b| QuantizationAdvice {
        params_b,
        recommended: profile.recommended_quantizations(params_b),
    });

    if format == OutputFormat::Json {
        return write_json(
            out,
            &SystemReport {
                profile,
                quantizations,
            },
        );
    }

    write_heading(out, "Hardware Profile")?;
    writeln!(
        out,
        "Tier: {} ({})",
        profile.tier,
        profile.tier.description()
    )?;
    writeln!(out, "Backend: {}", profile.backend.name)?;
    writeln!(out, "Summary: {}", profile.summary.description)?;
    writeln!(
        out,
        "Max model size: {:.1} GB",
        profile.summary.max_model_size_gb
    )?;
    writeln!(
        out,
        "Speed coefficient: {:.0}",
        profile.summary.speed_coefficient
    )?;

    write_heading(out, "CPU")?;
    let cpu = &profile.cpu;
    writeln!(out, "Model: {}", cpu.brand)?;
    writeln!(
        out,
        "Cores: {} physical, {} logical",
        cpu.physical_cores, cpu.logical_cores
    )?;
    if cpu.frequency_mhz > 0 {
        writeln!(out, "Frequency: {} MHz", cpu.frequency_mhz)?;
    }
    writeln!(out, "SIMD: {}", cpu.simd)?;

    write_heading(out, "Memory")?;
    let memory = &profile.memory;
    writeln!(
        out,
        "RAM: {:.1} GB total, {:.1} GB available ({:.0}% used)",
        memory.total_gb, memory.available_gb, memory.percent_used
    )?;

    write_heading(out, "GPU")?;
    if profile.gpu.has_gpu {
        write_vendor(out, "NVIDIA", profile.gpu.nvidia.as_ref())?;
        write_vendor(out, "AMD", profile.gpu.amd.as_ref())?;
        write_vendor(out, "Intel", profile.gpu.intel.as_ref())?;
    } else {
        writeln!(out, "No dedicated GPU detected")?;
    }

    write_heading(out, "Platform")?;
    let platform = &profile.platform;
    writeln!(
        out,
        "{} {} ({})",
        platform.system, platform.release, platform.machine
    )?;

    if let Some(advice) = quantizations {
        write_heading(out, "Quantizations")?;
        writeln!(
            out,
            "For a {}B model: {}",
            advice.params_b,
            advice.recommended.join(", ")
        )?;
    }

    writeln!(out)?;
    Ok(())
}

fn write_vendor<W: Write>(out: &mut W, vendor: &str, gpu: Option<&VendorGpu>) -> Result<()> {
    let Some(gpu) = gpu else {
        return Ok(());
    };

    let note = if gpu.estimated { " (estimated)" } else { "" };
    writeln!(
        out,
        "{}: {} device(s), {:.1} GB VRAM{}",
        vendor, gpu.count, gpu.total_vram_gb, note
    )?;
    for device in &gpu.devices {
        writeln!(out, "  • {} ({:.1} GB)", device.name, device.vram_gb)?;
    }
    Ok(())
}
