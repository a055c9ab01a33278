use std::collections::{HashMap, HashSet};

use super::{Lemmatizer, NlpResources};
use crate::error::Result;

/// Noun detachment rules: inflected ending, then its replacement.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

/// Noun lemmatizer in the style of WordNet's morphy.
///
/// Every word is treated as a noun: there is no part-of-speech tagging, so
/// verb and adjective forms pass through the noun rules. Irregular plurals
/// come from an exception table. Regular forms are produced by
/// [`SUBSTITUTIONS`] and accepted only when the noun index knows them, so
/// words like "always" or "chaos" are left alone.
#[derive(Debug, Clone, Copy)]
pub struct NounLemmatizer {
    exceptions: &'static HashMap<String, String>,
    index: &'static HashSet<String>,
}

impl NounLemmatizer {
    pub fn new() -> Result<Self> {
        Ok(Self::from_resources(super::ensure_resources()?))
    }

    pub fn from_resources(resources: &'static NlpResources) -> Self {
        Self {
            exceptions: resources.noun_exceptions(),
            index: resources.noun_index(),
        }
    }

    fn is_noun(&self, word: &str) -> bool {
        self.index.contains(word)
    }
}

/// Every form reachable from `forms` by one substitution.
fn detach_suffixes(forms: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for form in forms {
        for (suffix, replacement) in SUBSTITUTIONS {
            if let Some(stem) = form.strip_suffix(suffix) {
                let candidate = format!("{stem}{replacement}");
                if !candidate.is_empty() && !out.contains(&candidate) {
                    out.push(candidate);
                }
            }
        }
    }
    out
}

impl Lemmatizer for NounLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = self.exceptions.get(word) {
            return lemma.clone();
        }

        let mut forms = detach_suffixes(&[word.to_string()]);
        let mut known: Vec<&str> = std::iter::once(word)
            .chain(forms.iter().map(String::as_str))
            .filter(|form| self.is_noun(form))
            .collect();

        // Keep detaching until something is known or nothing is left
        while known.is_empty() && !forms.is_empty() {
            forms = detach_suffixes(&forms);
            known = forms
                .iter()
                .map(String::as_str)
                .filter(|form| self.is_noun(form))
                .collect();
        }

        known
            .into_iter()
            .min_by_key(|form| form.chars().count())
            .unwrap_or(word)
            .to_string()
    }
}
