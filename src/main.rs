// ヘッドレス再生 - 標準入力の "row col" 行を順に打ち、結果を表示する

use std::io::{self, BufRead};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use fibogrid::domain::config::GridSize;
use fibogrid::infrastructure::executor::ParallelConfig;
use fibogrid::infrastructure::share;
use fibogrid::{logging, Cursor, GameService};

fn parse_move(line: &str) -> Result<Cursor> {
    let mut parts = line.split_whitespace();
    let row = parts
        .next()
        .ok_or_else(|| anyhow!("行番号がありません"))?
        .parse::<usize>()
        .context("行番号が不正です")?;
    let col = parts
        .next()
        .ok_or_else(|| anyhow!("列番号がありません"))?
        .parse::<usize>()
        .context("列番号が不正です")?;
    Ok(Cursor::new(row, col))
}

fn main() -> Result<()> {
    let mut size = fibogrid::GRID_SIZE;
    let mut show_potential = false;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-v" | "--verbose" => logging::enable_verbose_logging(),
            "--potential" => show_potential = true,
            "--log" => {
                let path = args.next().ok_or_else(|| anyhow!("--log にはパスが必要です"))?;
                logging::init_log_file(path)?;
            }
            other => {
                size = other
                    .parse()
                    .with_context(|| format!("盤面サイズを解釈できません: {}", other))?
            }
        }
    }

    let mut game = GameService::new(GridSize::new(size)?, ParallelConfig::default())?;
    game.start();

    let stdin = io::stdin();
    for (n, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let cursor = parse_move(line).with_context(|| format!("{}行目", n + 1))?;
        let report = game.play_at(cursor)?;
        println!(
            "({}, {}) cleared={} total={}%",
            cursor.row, cursor.col, report.cleared_count, report.cleared_percentage
        );
    }

    println!("{}", share::encode(game.grid()));

    if show_potential {
        game.toggle_potential();
        if game.wait_potential(Duration::from_secs(60)) {
            if let Some(p) = game.view().potential() {
                match p.map.best() {
                    Some((c, v)) => println!("best=({}, {}) potential={}", c.row, c.col, v),
                    None => println!("best=none"),
                }
            }
        }
    }
    logging::close_log_file();
    Ok(())
}
