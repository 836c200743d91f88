//! Prompt compiler — turns a user's votes into the full analysis prompt.
//!
//! Flow: resolve each vote against the catalog → classify (render / unknown id /
//! invalid decision) → fail on unknown ids, then on invalid decisions → render
//! blocks in vote order → splice into `ANALYSIS_PROMPT_TEMPLATE`.
//!
//! Compilation is all-or-nothing and a pure function of its input.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use thiserror::Error;

use crate::models::vote::Vote;
use crate::survey::catalog::{self, Question};
use crate::survey::prompts::{ANALYSIS_PROMPT_TEMPLATE, QUESTION_BLOCK_TEMPLATE};

/// A decision after normalization. `Y` folds into `A`, `N` into `B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    A,
    B,
}

impl Decision {
    /// Normalizes a raw stored decision. Matching is exact and case-sensitive;
    /// anything outside `A`/`B`/`Y`/`N` is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "A" | "Y" => Some(Decision::A),
            "B" | "N" => Some(Decision::B),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::A => "A",
            Decision::B => "B",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// Votes referencing question ids absent from the catalog. `None` is a
    /// vote that carried no id at all.
    #[error("unknown question_id: {}", join_refs(.0))]
    UnknownQuestions(Vec<Option<i64>>),

    /// Votes on known questions whose decision is not A/B/Y/N.
    #[error("invalid decision for question_id: {} (only A/B accepted)", join_ids(.0))]
    InvalidDecisions(Vec<i64>),
}

/// The rendered instruction prompt, ready to send as a single user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPrompt(String);

impl CompiledPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CompiledPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compiles votes into the analysis prompt.
///
/// Unknown ids and invalid decisions are both collected over the whole list;
/// unknown ids are reported first. Callers must reject an empty vote list
/// before calling this.
pub fn compile(votes: &[Vote]) -> Result<CompiledPrompt, CompileError> {
    let mut resolved: Vec<(&'static Question, Decision)> = Vec::with_capacity(votes.len());
    let mut unknown = Vec::new();
    let mut invalid = Vec::new();

    for vote in votes {
        let Some(question) = vote.question_id.and_then(catalog::get) else {
            unknown.push(vote.question_id);
            continue;
        };
        match Decision::parse(&vote.decision) {
            Some(decision) => resolved.push((question, decision)),
            None => invalid.push(question.id),
        }
    }

    if !unknown.is_empty() {
        return Err(CompileError::UnknownQuestions(dedup_ids(unknown)));
    }
    if !invalid.is_empty() {
        return Err(CompileError::InvalidDecisions(dedup_ids(invalid)));
    }

    let blocks: Vec<String> = resolved
        .iter()
        .map(|(question, decision)| render_block(question, *decision))
        .collect();

    Ok(CompiledPrompt(render_prompt(&blocks.join("\n\n"))))
}

fn render_block(question: &Question, decision: Decision) -> String {
    QUESTION_BLOCK_TEMPLATE
        .replace("{number}", &question.number.to_string())
        .replace("{title}", question.title)
        .replace("{kind}", question.kind.as_str())
        .replace("{scene}", question.scene)
        .replace("{option_a}", question.option_a)
        .replace("{option_b}", question.option_b)
        .replace("{hint_a}", question.hint_a)
        .replace("{hint_b}", question.hint_b)
        .replace("{decision}", decision.as_str())
}

fn render_prompt(blocks: &str) -> String {
    let scenario = catalog::scenario();
    // {blocks} goes last so nothing inside a block is treated as a placeholder
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{scenario_title}", scenario.title)
        .replace("{scenario_premise}", scenario.premise)
        .replace("{a_name}", scenario.faction_a.name)
        .replace("{a_ideology}", scenario.faction_a.ideology)
        .replace("{a_tag}", scenario.faction_a.tag)
        .replace("{b_name}", scenario.faction_b.name)
        .replace("{b_ideology}", scenario.faction_b.ideology)
        .replace("{b_tag}", scenario.faction_b.tag)
        .replace("{blocks}", blocks)
}

fn dedup_ids<T: Copy + Eq + Hash>(ids: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_refs(ids: &[Option<i64>]) -> String {
    ids.iter()
        .map(|id| id.map_or_else(|| "null".to_string(), |id| id.to_string()))
        .collect::<Vec<_>>()
        .join(", ")
}
