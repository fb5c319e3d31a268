// 数列の整理とハイライト割り当て

use serde::{Deserialize, Serialize};

use super::sequence::Sequence;

/// ハイライトの濃さ（長さで決まる）
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Highlight {
    Light,  // 長さ3
    Medium, // 長さ4
    Strong, // 長さ5（消去）
}

impl Highlight {
    pub fn for_length(length: usize) -> Option<Self> {
        match length {
            3 => Some(Highlight::Light),
            4 => Some(Highlight::Medium),
            5 => Some(Highlight::Strong),
            _ => None,
        }
    }
}

/// 同じ線上のより長い数列に含まれる数列を取り除く
///
/// 戻り値は長さの昇順（同じ長さ同士は入力順を保つ）。
pub fn resolve(sequences: &[Sequence]) -> Vec<Sequence> {
    let mut kept: Vec<Sequence> = sequences
        .iter()
        .filter(|a| {
            !sequences
                .iter()
                .any(|b| b.length > a.length && b.contains(a))
        })
        .cloned()
        .collect();
    kept.sort_by_key(|s| s.length);
    kept
}

/// セルごとのハイライト（UI向け）
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightMap {
    size: usize,
    cells: Vec<Option<Highlight>>,
}

impl HighlightMap {
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// 長さの昇順に塗る（後勝ちなので長い数列が優先される）
    pub fn paint(size: usize, resolved: &[Sequence]) -> Self {
        let mut map = Self::empty(size);
        let mut ordered: Vec<&Sequence> = resolved.iter().collect();
        ordered.sort_by_key(|s| s.length);
        for seq in ordered {
            let Some(highlight) = Highlight::for_length(seq.length) else {
                continue;
            };
            for (y, x) in seq.cells() {
                if y < size && x < size {
                    map.cells[y * size + x] = Some(highlight);
                }
            }
        }
        map
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Highlight> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[row * self.size + col]
    }

    /// ハイライトされたセル数
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
