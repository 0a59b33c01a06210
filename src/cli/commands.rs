// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subcommand implementations.

use std::fs;
use std::path::{Path, PathBuf};

use hintrank::{
    frequencies, normalize, prepare_query, rank_scored, score_with_kind, FrequencyVector,
};

use super::display::{pad_right, Role, Style};
use super::CliError;

/// Arguments of `hintrank rank`.
pub struct RankArgs {
    pub query: String,
    pub words: Vec<String>,
    pub words_file: Option<PathBuf>,
    pub threshold: f64,
    pub scores: bool,
    pub limit: Option<usize>,
}

/// Read a JSON array-of-strings word list.
pub fn load_words(path: &Path) -> Result<Vec<String>, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::ReadWords {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::ParseWords {
        path: path.to_path_buf(),
        source,
    })
}

/// Positional words first, then the file's words, in order.
pub fn collect_candidates(
    words: Vec<String>,
    words_file: Option<&Path>,
) -> Result<Vec<String>, CliError> {
    let mut candidates = words;
    if let Some(path) = words_file {
        let from_file = load_words(path)?;
        tracing::debug!("Loaded {} words from {}", from_file.len(), path.display());
        candidates.extend(from_file);
    }
    Ok(candidates)
}

pub fn rank(args: RankArgs) -> Result<(), CliError> {
    let candidates = collect_candidates(args.words, args.words_file.as_deref())?;
    let scored = rank_scored(&args.query, &candidates, args.threshold)?;
    let shown = args.limit.unwrap_or(scored.len()).min(scored.len());

    let out = Style::stdout();
    for result in &scored[..shown] {
        if args.scores {
            println!(
                "{}  {}  {}",
                out.score_value(result.score),
                pad_right(&out.kind_badge(result.kind), 11),
                result.word
            );
        } else {
            println!("{}", result.word);
        }
    }

    if args.scores {
        let summary = format!(
            "{} of {} candidates at or above {}",
            scored.len(),
            candidates.len(),
            args.threshold
        );
        eprintln!("{}", Style::stderr().paint(Role::Muted, &summary));
    }
    Ok(())
}

pub fn score(query: &str, word: &str) {
    for line in score_report(query, word, &Style::stdout()) {
        println!("{}", line);
    }
}

/// Boxed breakdown of one pair. The query is prepared exactly as `rank`
/// and `POST /similar` prepare it, so the numbers agree across commands.
fn score_report(query: &str, word: &str, style: &Style) -> Vec<String> {
    let prepared = prepare_query(query);
    let similarity = score_with_kind(&prepared, word);

    vec![
        style.section("INPUT", true),
        style.row(&format!(" query       {}", query)),
        style.row(&format!(" prepared    {}", prepared)),
        style.row(&format!(" word        {}", word)),
        style.section("NORMALIZED", false),
        style.row(&format!(" query       {}", normalize(&prepared))),
        style.row(&format!(" word        {}", normalize(word))),
        style.section("TERMS", false),
        style.row(&format!(" query       {}", format_terms(&frequencies(&prepared), style))),
        style.row(&format!(" word        {}", format_terms(&frequencies(word), style))),
        style.section("RESULT", false),
        style.row(&format!(
            " score   {}   {}",
            style.score_value(similarity.score),
            style.kind_badge(similarity.kind)
        )),
        style.section_end(),
    ]
}

/// `term×count` pairs, most frequent first; `-` when empty.
fn format_terms(freq: &FrequencyVector<'_>, style: &Style) -> String {
    if freq.is_empty() {
        return style.paint(Role::Muted, "-");
    }
    freq.sorted()
        .iter()
        .map(|(term, count)| format!("{}×{}", term, count))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(feature = "server")]
pub fn serve(host: &str, port: u16) -> Result<(), CliError> {
    let addr: std::net::SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|_| CliError::Address(format!("{}:{}", host, port)))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    tracing::info!("Starting similarity API on http://{}", addr);
    runtime.block_on(hintrank::api::serve(addr))?;
    Ok(())
}
