// 盤面表示用の派生状態（ハイライトと潜在値）

use crate::application::estimation::StampedPotential;
use crate::domain::potential::potential_level;
use crate::domain::sequence::{Highlight, HighlightMap, Sequence};

/// セルの表示色
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellShade {
    None,
    /// 数列ハイライト（長さ別の濃さ）
    Sequence(Highlight),
    /// 潜在値の濃さ（1〜6）
    Potential(u8),
}

/// 確定した盤面から導出した表示状態
#[derive(Clone, Debug)]
pub struct BoardView {
    version: u64,
    sequences: Vec<Sequence>,
    highlights: HighlightMap,
    potential: Option<StampedPotential>,
}

impl BoardView {
    pub fn new(size: usize) -> Self {
        Self {
            version: 0,
            sequences: Vec::new(),
            highlights: HighlightMap::empty(size),
            potential: None,
        }
    }

    /// 新しい盤面バージョンの数列で更新（古い潜在値は捨てる）
    pub fn update(&mut self, version: u64, size: usize, resolved: Vec<Sequence>) {
        self.highlights = HighlightMap::paint(size, &resolved);
        self.sequences = resolved;
        if self.version != version {
            self.potential = None;
        }
        self.version = version;
    }

    /// 潜在値を反映（バージョンが一致するときだけ）
    pub fn set_potential(&mut self, potential: StampedPotential) -> bool {
        if potential.version != self.version {
            return false;
        }
        self.potential = Some(potential);
        true
    }

    pub fn clear_potential(&mut self) {
        self.potential = None;
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// 重複を除いた数列（長さの昇順）
    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    pub fn highlights(&self) -> &HighlightMap {
        &self.highlights
    }

    pub fn potential(&self) -> Option<&StampedPotential> {
        self.potential.as_ref()
    }

    /// セルの表示色（数列ハイライトが潜在値より優先）
    pub fn shade(&self, row: usize, col: usize, show_highlighting: bool) -> CellShade {
        if !show_highlighting {
            return CellShade::None;
        }
        if let Some(h) = self.highlights.get(row, col) {
            return CellShade::Sequence(h);
        }
        self.potential
            .as_ref()
            .and_then(|p| p.map.get(row, col))
            .and_then(potential_level)
            .map(CellShade::Potential)
            .unwrap_or(CellShade::None)
    }
}
