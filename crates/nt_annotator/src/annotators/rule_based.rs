use std::fmt;

use lazy_static::lazy_static;
use nt_core::{Chunk, EntityLabel, Error, PosTag, Result, TaggedToken, TextAnnotator};
use regex::Regex;

use crate::lexicon::{self, FIRST_NAMES, HONORIFICS, ORGANIZATION_KEYWORDS};
use crate::stopwords;

pub const DEFAULT_MAX_TOKENS: usize = 10_000;

/// Longest multi-word place name in the gazetteer.
const MAX_PLACE_WORDS: usize = 4;

lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(
        r"(?x)
        \p{N}+(?:[.,]\p{N}+)+
        | (?:Mr|Mrs|Ms|Dr|Prof|Sr|Jr|St|Gen|Sen|Rep|Gov|Lt|Col|Capt|Sgt|Rev|Inc|Corp|Ltd|Co|vs)\.
        | (?:\p{L}\.){2,}
        | [\p{L}\p{N}]+(?:['’\-][\p{L}\p{N}]+)*
        | \S
        "
    )
    .expect("token pattern is valid");
}

/// Lexicon and gazetteer driven tokenizer, tagger and entity chunker.
pub struct RuleBasedAnnotator {
    max_tokens: usize,
}

impl fmt::Debug for RuleBasedAnnotator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleBasedAnnotator")
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl Default for RuleBasedAnnotator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TOKENS)
    }
}

impl RuleBasedAnnotator {
    pub fn new(max_tokens: usize) -> Self {
        Self { max_tokens }
    }
}

impl TextAnnotator for RuleBasedAnnotator {
    fn name(&self) -> &str {
        "rule-based"
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        TOKEN_RE
            .find_iter(text)
            .flat_map(|m| split_clitic(m.as_str()))
            .collect()
    }

    fn pos_tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        tokens
            .iter()
            .map(|token| TaggedToken::new(token.clone(), tag_token(token)))
            .collect()
    }

    fn chunk(&self, tagged: &[TaggedToken]) -> Result<Vec<Chunk>> {
        if tagged.len() > self.max_tokens {
            return Err(Error::Annotation(format!(
                "input has {} tokens, limit is {}",
                tagged.len(),
                self.max_tokens
            )));
        }
        if let Some(index) = tagged.iter().position(|t| t.text.is_empty()) {
            return Err(Error::Annotation(format!("empty token at position {}", index)));
        }

        let mut chunks = Vec::with_capacity(tagged.len());
        let mut i = 0;
        while i < tagged.len() {
            if tagged[i].tag != PosTag::ProperNoun {
                chunks.push(Chunk::Token(tagged[i].clone()));
                i += 1;
                continue;
            }
            let end = run_end(tagged, i);
            chunks.extend(classify_run(&tagged[i..end]));
            i = end;
        }
        Ok(chunks)
    }

    fn is_stopword(&self, word: &str) -> bool {
        stopwords::is_english_stopword(word)
    }
}

/// Split contractions the way Treebank tokenizers do: `don't` -> `do n't`,
/// `Reuters's` -> `Reuters 's`.
fn split_clitic(token: &str) -> Vec<String> {
    let Some(apostrophe) = token.rfind(|c: char| c == '\'' || c == '’') else {
        return vec![token.to_string()];
    };
    let after = &token[apostrophe..];
    let suffix = after
        .chars()
        .skip(1)
        .collect::<String>()
        .to_lowercase();

    let negation = token[..apostrophe].ends_with(|c: char| c == 'n' || c == 'N');
    if suffix == "t" && apostrophe > 1 && negation {
        let split = apostrophe - 1;
        return vec![token[..split].to_string(), token[split..].to_string()];
    }
    if apostrophe > 0 && matches!(suffix.as_str(), "s" | "re" | "ve" | "ll" | "d" | "m") {
        return vec![token[..apostrophe].to_string(), after.to_string()];
    }
    vec![token.to_string()]
}

fn is_acronym(token: &str) -> bool {
    let letters: Vec<char> = token.chars().filter(|c| *c != '.').collect();
    letters.len() >= 2 && letters.iter().all(|c| c.is_alphabetic() && c.is_uppercase())
}

/// Lowercased form with dots removed, used for lexicon lookups.
fn lookup_form(token: &str) -> String {
    token.to_lowercase().replace('’', "'").replace('.', "")
}

fn tag_token(token: &str) -> PosTag {
    if !token.chars().any(char::is_alphanumeric) {
        return PosTag::Punctuation;
    }
    if token.chars().next().is_some_and(char::is_numeric)
        && token.chars().all(|c| c.is_numeric() || c == '.' || c == ',')
    {
        return PosTag::Number;
    }

    let lower = token.to_lowercase().replace('’', "'");
    if !is_acronym(token) {
        if lexicon::DETERMINERS.contains(lower.as_str()) {
            return PosTag::Determiner;
        }
        if lexicon::PREPOSITIONS.contains(lower.as_str()) {
            return PosTag::Preposition;
        }
        if lexicon::PRONOUNS.contains(lower.as_str()) {
            return PosTag::Pronoun;
        }
        if lexicon::CONJUNCTIONS.contains(lower.as_str()) {
            return PosTag::Conjunction;
        }
        if lexicon::AUXILIARIES.contains(lower.as_str()) {
            return PosTag::Verb;
        }
    }

    if token.chars().next().is_some_and(char::is_uppercase) {
        return PosTag::ProperNoun;
    }
    if lower.ends_with("ly") {
        PosTag::Adverb
    } else if lower.ends_with("ing") || lower.ends_with("ed") {
        PosTag::Verb
    } else if ["ous", "ful", "ive", "able", "ible", "al", "ic"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        PosTag::Adjective
    } else {
        PosTag::Noun
    }
}

/// End (exclusive) of the proper-noun run starting at `start`.
///
/// `&` may join proper nouns, and an organization name may continue through
/// `of` / `for` (`Bank of England`).
fn run_end(tagged: &[TaggedToken], start: usize) -> usize {
    let is_nnp = |i: usize| tagged.get(i).is_some_and(|t| t.tag == PosTag::ProperNoun);
    let is_ampersand = |i: usize| tagged.get(i).is_some_and(|t| t.text == "&");

    let mut end = start;
    loop {
        while is_nnp(end) || (end > start && is_ampersand(end) && is_nnp(end + 1)) {
            end += 1;
        }
        let has_org_keyword = tagged[start..end]
            .iter()
            .any(|t| ORGANIZATION_KEYWORDS.contains(lookup_form(&t.text).as_str()));
        let connector = tagged
            .get(end)
            .is_some_and(|t| matches!(t.text.as_str(), "of" | "for"));
        if has_org_keyword && connector && is_nnp(end + 1) {
            end += 1;
            continue;
        }
        return end;
    }
}

fn entity(label: EntityLabel, tokens: &[TaggedToken]) -> Chunk {
    Chunk::Entity {
        label,
        tokens: tokens.to_vec(),
    }
}

/// Length of the longest gazetteer place name starting at `forms[0]`.
fn place_len(forms: &[String]) -> Option<usize> {
    (1..=forms.len().min(MAX_PLACE_WORDS))
        .rev()
        .find(|&n| lexicon::is_place(&forms[..n].join(" ")))
}

/// How many tokens from `from` can belong to a personal name, at most `max`.
fn name_len(run: &[TaggedToken], forms: &[String], from: usize, max: usize) -> usize {
    (from..run.len())
        .take(max)
        .take_while(|&j| {
            place_len(&forms[j..]).is_none()
                && !HONORIFICS.contains(forms[j].as_str())
                && !is_acronym(&run[j].text)
        })
        .count()
}

fn classify_run(run: &[TaggedToken]) -> Vec<Chunk> {
    let forms: Vec<String> = run.iter().map(|t| lookup_form(&t.text)).collect();

    let all_acronyms = run.iter().all(|t| is_acronym(&t.text))
        && !forms.iter().any(|f| HONORIFICS.contains(f.as_str()) || lexicon::is_place(f));
    if all_acronyms || forms.iter().any(|f| ORGANIZATION_KEYWORDS.contains(f.as_str())) {
        return vec![entity(EntityLabel::Organization, run)];
    }

    let mut chunks = Vec::new();
    let mut k = 0;
    while k < run.len() {
        if let Some(n) = place_len(&forms[k..]) {
            chunks.push(entity(EntityLabel::Gpe, &run[k..k + n]));
            k += n;
            continue;
        }

        if HONORIFICS.contains(forms[k].as_str()) {
            let n = name_len(run, &forms, k + 1, 2);
            chunks.push(Chunk::Token(run[k].clone()));
            if n > 0 {
                chunks.push(entity(EntityLabel::Person, &run[k + 1..k + 1 + n]));
            }
            k += 1 + n;
            continue;
        }

        if FIRST_NAMES.contains(forms[k].as_str()) {
            let n = name_len(run, &forms, k + 1, 1);
            if n > 0 {
                chunks.push(entity(EntityLabel::Person, &run[k..k + 1 + n]));
                k += 1 + n;
                continue;
            }
        }

        if is_acronym(&run[k].text) {
            chunks.push(entity(EntityLabel::Organization, &run[k..k + 1]));
        } else {
            chunks.push(Chunk::Token(run[k].clone()));
        }
        k += 1;
    }
    chunks
}
