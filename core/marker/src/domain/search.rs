//! ブックマーク検索
//!
//! 大文字小文字を区別しない部分一致でスコアを付け、スコア降順に並べる。
//! 同点はストア順（安定ソート）。部分一致しないものは fuzzy（nucleo）で拾う。
//! 状態を持たないので、同じレコード列に何度でも・並行にでも呼べる。

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use super::record::Record;

/// description の部分一致
pub const DESCRIPTION_HIT: u32 = 100;
/// template の部分一致
pub const TEMPLATE_HIT: u32 = 50;
/// fuzzy だけで当たったときの上限（部分一致より必ず低い）
const FUZZY_MAX: u32 = TEMPLATE_HIT - 1;

/// 検索結果の 1 件（index はストア内の 0 始まりの位置）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub index: usize,
    pub record: &'a Record,
    pub score: u32,
}

/// 検索結果
///
/// 並び順だけを保持し、`iter()` のたびに先頭から辿り直せる。
#[derive(Debug, Clone)]
pub struct SearchResults<'a> {
    records: &'a [Record],
    ranked: Vec<(usize, u32)>,
}

impl<'a> SearchResults<'a> {
    pub fn iter(&self) -> impl Iterator<Item = Match<'a>> + '_ {
        let records = self.records;
        self.ranked.iter().map(move |&(index, score)| Match {
            index,
            record: &records[index],
            score,
        })
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// records を query で検索する。空のクエリは全件をストア順・スコア 0 で返す。
pub fn search<'a>(records: &'a [Record], query: &str) -> SearchResults<'a> {
    let query = query.trim();
    if query.is_empty() {
        return SearchResults {
            records,
            ranked: (0..records.len()).map(|i| (i, 0)).collect(),
        };
    }

    let needle = query.to_lowercase();
    let mut fuzzy = FuzzyScorer::new(query);
    let mut ranked: Vec<(usize, u32)> = records
        .iter()
        .enumerate()
        .filter_map(|(i, r)| score_record(r, &needle, &mut fuzzy).map(|s| (i, s)))
        .collect();
    // sort_by は安定ソート
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    SearchResults { records, ranked }
}

fn score_record(record: &Record, needle: &str, fuzzy: &mut FuzzyScorer) -> Option<u32> {
    let mut score = 0;
    if record.description.to_lowercase().contains(needle) {
        score += DESCRIPTION_HIT;
    }
    if record.template.to_lowercase().contains(needle) {
        score += TEMPLATE_HIT;
    }
    if score > 0 {
        return Some(score);
    }
    let haystack = format!("{} {}", record.template, record.description);
    fuzzy
        .score(&haystack)
        .map(|s| 1 + (s / 20).min(FUZZY_MAX - 1))
}

/// nucleo のパターンとバッファを使い回すための入れ物
struct FuzzyScorer {
    pattern: Pattern,
    matcher: Matcher,
    buf: Vec<char>,
}

impl FuzzyScorer {
    fn new(query: &str) -> Self {
        // クエリ中の `!` `^` `$` をシェルコマンドの文字として扱うため、構文解析はしない
        let pattern = Pattern::new(
            query,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );
        Self {
            pattern,
            matcher: Matcher::new(Config::DEFAULT),
            buf: Vec::with_capacity(64),
        }
    }

    fn score(&mut self, haystack: &str) -> Option<u32> {
        self.buf.clear();
        let utf32 = Utf32Str::new(haystack, &mut self.buf);
        self.pattern.score(utf32, &mut self.matcher)
    }
}
