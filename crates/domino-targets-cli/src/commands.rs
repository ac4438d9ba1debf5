use std::io::{self, Write};

use domino_targets_code::{
    enumerate_valid, min_pairwise_distance, CodeConstraints, CodeGenerator, DominoCode, Matcher,
};
use domino_targets_print::{
    generate_sheets, registry_from_manifests, write_sheet, BatchRequest, GenerateConfig,
    RenderOptions, SheetManifest, SheetSpec,
};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::args::{EnumerateArgs, GenerateArgs, IdentifyArgs};
use crate::error::CliError;

/// Merge command-line values over the optional config file.
fn resolve_config(args: &GenerateArgs) -> Result<GenerateConfig, CliError> {
    let mut cfg = match &args.config {
        Some(path) => GenerateConfig::load_json(path)?,
        None => GenerateConfig::default(),
    };
    if let Some(rows) = args.rows {
        cfg.rows = Some(rows);
    }
    if let Some(cols) = args.cols {
        cfg.cols = Some(cols);
    }
    if let Some(files) = args.files {
        cfg.files = files;
    }
    if let Some(scale) = args.adjust_scale {
        cfg.adjust_scale = scale;
    }
    if let Some(dir) = &args.output_dir {
        cfg.output_dir = dir.clone();
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    if let Some(formats) = &args.format {
        cfg.formats = formats.clone();
    }
    if let Some(dpi) = args.png_dpi {
        cfg.png_dpi = dpi;
    }
    cfg.exclude.extend(args.exclude.iter().cloned());
    Ok(cfg)
}

pub fn generate(args: &GenerateArgs) -> Result<(), CliError> {
    let cfg = resolve_config(args)?;
    let rows = cfg.rows.ok_or(CliError::MissingArgument("rows"))?;
    let cols = cfg.cols.ok_or(CliError::MissingArgument("cols"))?;
    let sheet = SheetSpec::new(rows, cols, cfg.adjust_scale);
    sheet.validate()?;

    let seed = cfg.seed.unwrap_or_else(rand::random);
    info!("seed {seed}");
    let request = BatchRequest {
        sheet,
        files: cfg.files,
        seed: Some(seed),
    };

    let mut registry = registry_from_manifests(&cfg.exclude)?;
    let mut generator = CodeGenerator::new(StdRng::seed_from_u64(seed), cfg.constraints);
    let sheets = generate_sheets(&request, &mut generator, &mut registry)?;

    let options = RenderOptions {
        formats: cfg.formats.clone(),
        png_dpi: cfg.png_dpi,
    };
    let mut stdout = io::stdout().lock();
    for sheet in &sheets {
        for path in write_sheet(sheet, &cfg.output_dir, &options)? {
            writeln!(stdout, "{}", path.display())?;
        }
    }

    let codes: Vec<DominoCode> = sheets.iter().flat_map(|s| s.manifest.codes()).collect();
    if let Some(d) = min_pairwise_distance(&codes) {
        info!("minimum Hamming distance between issued codes: {d}");
    }
    Ok(())
}

#[derive(Serialize)]
struct CodeEntry {
    code: DominoCode,
    hex: String,
    rows: [String; 2],
}

pub fn enumerate(args: &EnumerateArgs) -> Result<(), CliError> {
    let codes = enumerate_valid(&CodeConstraints::default());
    info!("{} valid codes", codes.len());

    let mut stdout = io::stdout().lock();
    if args.json {
        let entries: Vec<CodeEntry> = codes
            .iter()
            .map(|&code| {
                let ascii = code.to_ascii();
                let mut lines = ascii.lines().map(str::to_string);
                CodeEntry {
                    code,
                    hex: code.to_string(),
                    rows: [
                        lines.next().unwrap_or_default(),
                        lines.next().unwrap_or_default(),
                    ],
                }
            })
            .collect();
        serde_json::to_writer_pretty(&mut stdout, &entries)?;
        writeln!(stdout)?;
    } else {
        for code in codes {
            writeln!(stdout, "{code}\n{}\n", code.to_ascii())?;
        }
    }
    Ok(())
}

pub fn identify(args: &IdentifyArgs) -> Result<(), CliError> {
    let observed: DominoCode = args
        .code
        .parse()
        .map_err(|_| CliError::InvalidCode(args.code.clone()))?;

    let manifest = args
        .manifest
        .as_ref()
        .map(SheetManifest::load_json)
        .transpose()?;
    let codes: Vec<DominoCode> = match &manifest {
        Some(m) => m.codes().collect(),
        None => enumerate_valid(&CodeConstraints::default()),
    };

    let matcher = Matcher::new(codes, args.max_hamming);
    let m = matcher
        .match_code(observed.bits())
        .ok_or_else(|| CliError::NoMatch {
            observed: observed.to_string(),
            max_hamming: args.max_hamming,
        })?;
    if m.hamming > 0 {
        warn!("{} dot(s) differ from the closest code", m.hamming);
    }

    let mut stdout = io::stdout().lock();
    write!(stdout, "id {}", m.id)?;
    if let Some(record) = manifest.as_ref().and_then(|mf| mf.dominoes.get(m.id as usize)) {
        write!(stdout, " (row {}, col {}, {})", record.row, record.col, record.hex)?;
    }
    writeln!(stdout, " rotated={} hamming={}", m.rotated, m.hamming)?;
    Ok(())
}
