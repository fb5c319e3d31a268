// 数列（検出結果）の定義

use serde::{Deserialize, Serialize};

use crate::constants::{CellValue, MIN_SEQUENCE_LEN};
use crate::domain::grid::Grid;

/// 数列が乗っている線の種類
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Row,
    Column,
}

/// 検出された一本の数列
///
/// 盤面から毎回導出される値で、単独では保存しない。
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence {
    #[serde(rename = "type")]
    pub kind: LineKind,
    /// 行番号または列番号
    #[serde(rename = "index")]
    pub line_index: usize,
    /// 線上の開始位置
    pub start: usize,
    pub length: usize,
    pub values: Vec<CellValue>,
}

impl Sequence {
    pub fn new(kind: LineKind, line_index: usize, start: usize, values: Vec<CellValue>) -> Self {
        Self {
            kind,
            line_index,
            start,
            length: values.len(),
            values,
        }
    }

    /// 終端（排他的）
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn same_line(&self, other: &Sequence) -> bool {
        self.kind == other.kind && self.line_index == other.line_index
    }

    /// other の範囲を完全に含むか
    pub fn contains(&self, other: &Sequence) -> bool {
        self.same_line(other) && self.start <= other.start && self.end() >= other.end()
    }

    /// 盤面上の座標 (row, col) を順に返す
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.start..self.end()).map(move |i| Grid::line_coord(self.kind, self.line_index, i))
    }
}

/// 3つ組が漸化式 c == a + b を満たすか（オーバーフローしない）
#[inline]
pub(crate) fn satisfies_recurrence(a: CellValue, b: CellValue, c: CellValue) -> bool {
    a as i64 + b as i64 == c as i64
}

/// 一般化フィボナッチ数列の判定
///
/// 長さ3以上、0を含まず、かつ i>=2 で values[i] == values[i-1] + values[i-2]。
pub fn is_generalized_fibonacci(values: &[CellValue]) -> bool {
    if values.len() < MIN_SEQUENCE_LEN {
        return false;
    }
    if values.contains(&0) {
        return false;
    }
    values
        .windows(3)
        .all(|w| satisfies_recurrence(w[0], w[1], w[2]))
}
