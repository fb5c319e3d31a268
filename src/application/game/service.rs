// ゲーム進行サービス - 手の適用と派生状態の再計算を一本のパイプラインで行う

use anyhow::{anyhow, Context, Result};
use std::time::Duration;

use crate::application::estimation::PotentialService;
use crate::constants::FAST_MOVE_STEP;
use crate::domain::config::{GameSettings, GridSize};
use crate::domain::grid::{Cursor, Direction, Grid};
use crate::domain::moves::apply_move;
use crate::domain::sequence::{detect, resolve, Sequence};
use crate::infrastructure::executor::ParallelConfig;
use crate::presentation::state::{BoardView, CellShade};
use crate::vlog;

/// 一手の報告
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// 適用後の盤面バージョン
    pub version: u64,
    pub cursor: Cursor,
    /// 消えた長さ5数列の本数
    pub cleared_count: usize,
    pub cleared: Vec<Sequence>,
    /// 消去率（%）
    pub cleared_percentage: u32,
}

/// ゲーム全体を管理するサービス
///
/// 盤面の変更は commit を通してのみ行い、そのたびにバージョンを進めて
/// ハイライトを再計算し、必要なら潜在値計算を要求し直す。
pub struct GameService {
    grid: Grid,
    cursor: Cursor,
    settings: GameSettings,
    version: u64,
    started: bool,
    /// 消去率（%）。消去が起きた手でのみ更新
    cleared_percentage: u32,
    view: BoardView,
    potential: PotentialService,
}

impl GameService {
    pub fn new(size: GridSize, parallel: ParallelConfig) -> Result<Self> {
        Self::with_grid(Grid::new(size.get()), parallel)
    }

    /// 既存の盤面から開始（保存元は問わない）
    pub fn with_grid(grid: Grid, parallel: ParallelConfig) -> Result<Self> {
        if grid.size() == 0 {
            return Err(anyhow!("盤面が空です"));
        }
        let potential = PotentialService::new(parallel).context("潜在値サービスを作成できません")?;
        let size = grid.size();
        let cleared_percentage = grid.cleared_percentage();
        let mut service = Self {
            grid,
            cursor: Cursor::center(size),
            settings: GameSettings::default(),
            version: 0,
            started: false,
            cleared_percentage,
            view: BoardView::new(size),
            potential,
        };
        service.refresh_derived();
        Ok(service)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    pub fn cleared_percentage(&self) -> u32 {
        self.cleared_percentage
    }

    /// ゲーム開始
    pub fn start(&mut self) {
        self.started = true;
    }

    /// 盤面を初期化し未開始に戻す
    pub fn reset(&mut self) {
        let size = self.grid.size();
        self.started = false;
        self.cleared_percentage = 0;
        self.commit(Grid::new(size));
        vlog!("[ゲーム] リセット: version={}", self.version);
    }

    /// カーソル移動（fast なら5マス）
    pub fn move_cursor(&mut self, direction: Direction, fast: bool) -> Cursor {
        let amount = if fast { FAST_MOVE_STEP } else { 1 };
        self.cursor = self.cursor.moved(direction, amount, self.grid.size());
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: Cursor) -> Result<()> {
        self.grid.check_cursor(cursor)?;
        self.cursor = cursor;
        Ok(())
    }

    /// 現在のカーソル位置に手を打つ
    pub fn play(&mut self) -> Result<MoveReport> {
        if !self.started {
            return Err(anyhow!("ゲームが開始されていません"));
        }
        let outcome = apply_move(&self.grid, self.cursor)
            .with_context(|| format!("手を適用できません: {:?}", self.cursor))?;
        self.commit(outcome.grid);

        if outcome.cleared_count > 0 {
            self.cleared_percentage = self.grid.cleared_percentage();
            vlog!(
                "[ゲーム] {:?} で {}本消去 → 消去率{}%",
                self.cursor,
                outcome.cleared_count,
                self.cleared_percentage()
            );
        }
        Ok(MoveReport {
            version: self.version,
            cursor: self.cursor,
            cleared_count: outcome.cleared_count,
            cleared: outcome.cleared,
            cleared_percentage: self.cleared_percentage(),
        })
    }

    /// 指定位置に手を打つ
    pub fn play_at(&mut self, cursor: Cursor) -> Result<MoveReport> {
        self.set_cursor(cursor)?;
        self.play()
    }

    /// 盤面を確定させ、派生状態を作り直す
    fn commit(&mut self, grid: Grid) {
        self.grid = grid;
        self.version += 1;
        self.refresh_derived();
    }

    fn refresh_derived(&mut self) {
        let resolved = resolve(&detect(&self.grid));
        self.view.update(self.version, self.grid.size(), resolved);
        if self.settings.show_potential {
            self.potential.request(&self.grid, self.version);
        } else {
            self.potential.cancel();
        }
    }

    pub fn toggle_highlighting(&mut self) -> bool {
        self.settings.show_highlighting = !self.settings.show_highlighting;
        self.settings.show_highlighting
    }

    pub fn toggle_magnifier(&mut self) -> bool {
        self.settings.show_magnifier = !self.settings.show_magnifier;
        self.settings.show_magnifier
    }

    pub fn increase_magnifier(&mut self) -> usize {
        self.settings.magnifier_size = self.settings.magnifier_size.increased();
        self.settings.magnifier_size.get()
    }

    pub fn decrease_magnifier(&mut self) -> usize {
        self.settings.magnifier_size = self.settings.magnifier_size.decreased();
        self.settings.magnifier_size.get()
    }

    /// 潜在値表示の切り替え（OFFで計算中のものも破棄）
    pub fn toggle_potential(&mut self) -> bool {
        self.settings.show_potential = !self.settings.show_potential;
        if self.settings.show_potential {
            self.potential.request(&self.grid, self.version);
        } else {
            self.potential.cancel();
            self.view.clear_potential();
        }
        self.settings.show_potential
    }

    /// 計算中の潜在値があるか
    pub fn is_calculating_potential(&self) -> bool {
        self.potential.latest_version().is_some() && self.view.potential().is_none()
    }

    /// 届いた潜在値を取り込む（現在の盤面と一致するものだけ）
    pub fn poll_potential(&mut self) -> bool {
        match self.potential.try_latest() {
            Some(p) => self.view.set_potential(p),
            None => false,
        }
    }

    /// 現在の盤面の潜在値が届くまで待つ
    pub fn wait_potential(&mut self, timeout: Duration) -> bool {
        match self.potential.wait_latest(timeout) {
            Some(p) => self.view.set_potential(p),
            None => false,
        }
    }

    /// セルの表示色
    pub fn cell_shade(&self, row: usize, col: usize) -> CellShade {
        self.view.shade(row, col, self.settings.show_highlighting)
    }
}
