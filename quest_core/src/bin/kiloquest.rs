//! Terminal front end for KiloQuest.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use quest_core::{
    copy_with_fallback, CopyOutcome, CopyTarget, EndingSummary, Phase, QuestMachine, Resolution,
    ShareCard, StepCounter, StepGauge, MANUAL_COPY_NOTICE,
};
use quest_rules::{Challenge, Genre, QuestConfig, Verdict};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// You have a thousand steps. Every guess tests your kilo-wisdom.
#[derive(Debug, Parser)]
#[command(name = "kiloquest", version, about)]
struct Args {
    /// Skip the menu and start in this genre (fantasy, scifi, mystery, apocalyptic).
    #[arg(long, value_parser = parse_genre)]
    genre: Option<Genre>,

    /// Seed for the challenge order shuffle.
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file overriding the default rules.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the answer delay and the counting animation.
    #[arg(long)]
    no_delay: bool,

    /// Also print the ending summary as JSON.
    #[arg(long)]
    json: bool,
}

fn parse_genre(s: &str) -> Result<Genre, String> {
    s.parse().map_err(|e: quest_rules::RulesError| e.to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => QuestConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => QuestConfig::default(),
    };
    info!(?config, "configuration loaded");

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = Terminal {
        machine: QuestMachine::new(config),
        rng,
        input: stdin.lock(),
        out: stdout.lock(),
        no_delay: args.no_delay,
        json: args.json,
        preset_genre: args.genre,
        clipboard: SystemClipboard::default(),
    };
    game.run()
}

struct Terminal<R, W> {
    machine: QuestMachine,
    rng: StdRng,
    input: R,
    out: W,
    no_delay: bool,
    json: bool,
    preset_genre: Option<Genre>,
    clipboard: SystemClipboard,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    fn run(&mut self) -> Result<()> {
        loop {
            let keep_going = match self.machine.phase() {
                Phase::NotStarted => self.choose_genre()?,
                Phase::InRound => self.play_round()?,
                Phase::Answering => {
                    self.machine.settle()?;
                    true
                }
                Phase::Resolved => self.show_resolution()?,
                Phase::Ended => self.show_ending()?,
            };
            if !keep_going {
                writeln!(self.out, "Farewell, kilo-traveler.")?;
                self.out.flush()?;
                return Ok(());
            }
        }
    }

    /// Read one trimmed line; `None` on end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{} ", label)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn pause(&self, millis: u64) {
        if !self.no_delay && millis > 0 {
            thread::sleep(Duration::from_millis(millis));
        }
    }

    fn choose_genre(&mut self) -> Result<bool> {
        let genre = match self.preset_genre.take() {
            Some(genre) => genre,
            None => {
                writeln!(self.out)?;
                writeln!(self.out, "=== KILO SYSTEM v1.0 :: KiloQuest, KiloGuess Edition ===")?;
                writeln!(self.out, "You have a thousand steps. Every guess tests your kilo-wisdom.")?;
                writeln!(self.out)?;
                writeln!(self.out, "Select your quest genre:")?;
                for (i, genre) in Genre::ALL.iter().enumerate() {
                    writeln!(self.out, "  {}) {}", i + 1, genre.display_name())?;
                }
                loop {
                    let Some(choice) = self.prompt("genre [1-4, q]>")? else {
                        return Ok(false);
                    };
                    if choice.eq_ignore_ascii_case("q") {
                        return Ok(false);
                    }
                    let picked = choice
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| n.checked_sub(1))
                        .and_then(|i| Genre::ALL.get(i).copied())
                        .or_else(|| choice.parse().ok());
                    match picked {
                        Some(genre) => break genre,
                        None => writeln!(self.out, "Unknown genre '{}'.", choice)?,
                    }
                }
            }
        };

        self.machine.start(genre, &mut self.rng)?;
        self.show_opening(genre)?;
        Ok(true)
    }

    fn show_opening(&mut self, genre: Genre) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", genre.profile().opening_story)?;
        Ok(())
    }

    fn play_round(&mut self) -> Result<bool> {
        let (session, challenge) = match (self.machine.session(), self.machine.challenge()) {
            (Some(session), Some(challenge)) => (session.clone(), challenge.clone()),
            _ => return Ok(true),
        };
        let config = self.machine.config().clone();
        let gauge = StepGauge::new(session.steps, config.starting_steps);

        writeln!(self.out)?;
        writeln!(
            self.out,
            "Kilo-Round #{}  {}  steps left: {}{}  spent: {}",
            session.round,
            gauge.render_segments(),
            session.steps,
            if gauge.is_low() { " (low!)" } else { "" },
            session.steps_spent
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", challenge.story)?;
        writeln!(self.out)?;
        write_challenge(&mut self.out, &challenge)?;
        writeln!(
            self.out,
            "Kilo-Correct: -{}  Kilo-Close: -{}  Kilo-Wrong: -{}",
            config.score_table.correct, config.score_table.close, config.score_table.wrong
        )?;

        loop {
            let Some(choice) = self.prompt("answer [A-D, q]>")? else {
                return Ok(false);
            };
            if choice.eq_ignore_ascii_case("q") {
                return Ok(false);
            }
            let Some(index) = parse_option(&choice) else {
                writeln!(self.out, "Pick one of A, B, C, D.")?;
                continue;
            };
            match self.machine.select(index) {
                Ok(()) => break,
                Err(e) => writeln!(self.out, "{}", e)?,
            }
        }

        self.pause(config.answer_delay_ms);
        let resolution = self.machine.settle()?.clone();
        self.animate(&resolution, &config)?;
        Ok(true)
    }

    fn animate(&mut self, resolution: &Resolution, config: &QuestConfig) -> Result<()> {
        if self.no_delay {
            return Ok(());
        }
        for frame in StepCounter::new(resolution.steps_before, resolution.steps_after, &config.animation) {
            write!(self.out, "\rsteps: {:>5}", frame)?;
            self.out.flush()?;
            thread::sleep(Duration::from_millis(config.animation.tick_ms));
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn show_resolution(&mut self) -> Result<bool> {
        if let Some(resolution) = self.machine.resolution() {
            write_resolution(&mut self.out, resolution)?;
        }
        let Some(choice) = self.prompt("[enter] continue kilo-quest, q to quit>")? else {
            return Ok(false);
        };
        if choice.eq_ignore_ascii_case("q") {
            return Ok(false);
        }
        self.machine.continue_quest()?;
        Ok(true)
    }

    fn show_ending(&mut self) -> Result<bool> {
        if let Some(resolution) = self.machine.resolution() {
            write_resolution(&mut self.out, resolution)?;
        }
        let summary = self.machine.ending(Utc::now())?;
        write_ending(&mut self.out, &summary)?;
        if self.json {
            writeln!(self.out, "{}", serde_json::to_string_pretty(&summary)?)?;
        }

        loop {
            let Some(choice) = self.prompt("[p]lay again, [c]opy result, [r]estart, [q]uit>")? else {
                return Ok(false);
            };
            match choice.to_ascii_lowercase().as_str() {
                "p" => {
                    self.machine.replay(&mut self.rng)?;
                    self.show_opening(summary.genre)?;
                    return Ok(true);
                }
                "r" => {
                    self.machine.restart();
                    return Ok(true);
                }
                "c" => self.share(&summary)?,
                "q" => return Ok(false),
                _ => writeln!(self.out, "Unknown choice '{}'.", choice)?,
            }
        }
    }

    fn share(&mut self, summary: &EndingSummary) -> Result<()> {
        let card = ShareCard::from_summary(summary);
        let payload = card.payload();
        let mut fallback = FileDrop {
            path: PathBuf::from("kiloquest-result.txt"),
        };

        match copy_with_fallback(&mut self.clipboard, &mut fallback, &payload) {
            Ok(CopyOutcome::Primary) => writeln!(self.out, "Copied!")?,
            Ok(CopyOutcome::Fallback) => {
                writeln!(self.out, "Saved to {} for copying.", fallback.path.display())?
            }
            Err(e) => {
                info!(error = %e, "share copy failed");
                writeln!(self.out)?;
                writeln!(self.out, "{}", MANUAL_COPY_NOTICE)?;
                writeln!(self.out, "{}", payload)?;
                self.prompt("[enter] to dismiss>")?;
            }
        }
        Ok(())
    }
}

fn parse_option(choice: &str) -> Option<usize> {
    let mut chars = choice.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match first.to_ascii_uppercase() {
        c @ 'A'..='D' => Some(c as usize - 'A' as usize),
        c @ '1'..='4' => Some(c as usize - '1' as usize),
        _ => None,
    }
}

fn write_challenge(out: &mut impl Write, challenge: &Challenge) -> io::Result<()> {
    writeln!(out, "KiloGuess Challenge: {}", challenge.question)?;
    for (i, option) in challenge.options.iter().enumerate() {
        writeln!(out, "  {}) {}", Challenge::option_label(i), option)?;
    }
    Ok(())
}

fn write_resolution(out: &mut impl Write, resolution: &Resolution) -> io::Result<()> {
    writeln!(out)?;
    let mark = match resolution.verdict {
        Verdict::Correct => "🎯",
        Verdict::Close => "🤔",
        Verdict::Wrong => "❌",
    };
    writeln!(out, "{} {}  -{}", mark, resolution.verdict.banner(), resolution.steps_deducted)?;
    writeln!(out, "{}", resolution.explanation)?;
    writeln!(out, "Fun fact: {}", resolution.fun_fact)
}

fn write_ending(out: &mut impl Write, summary: &EndingSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "=== KILO-JOURNEY COMPLETE :: {} QUEST #{} ===",
        summary.genre.id().to_uppercase(),
        summary.rounds
    )?;
    writeln!(out)?;
    writeln!(out, "\"{}\"", summary.ending)?;
    writeln!(out)?;
    writeln!(out, "Kilo-Steps Used: {}", summary.steps_spent)?;
    writeln!(out, "Accuracy:        {}% ({})", summary.accuracy_percent, summary.rating)?;
    writeln!(out, "Time Taken:      {} over {} rounds", summary.elapsed_label, summary.rounds)?;
    writeln!(out, "Avg Steps/Round: {}", summary.average_spent_per_round)?;
    writeln!(
        out,
        "{}: {}  {}: {}  {}: {}",
        summary.stats_labels.correct,
        summary.tally.correct,
        summary.stats_labels.close,
        summary.tally.close,
        summary.stats_labels.wrong,
        summary.tally.wrong
    )?;
    writeln!(out)?;
    writeln!(out, "Your Kilo-Title: {}", summary.archetype.name)?;
    writeln!(out, "  \"{}\"", summary.archetype.tagline)?;
    writeln!(out, "  {}", summary.archetype.description)?;
    writeln!(out)?;
    writeln!(out, "Achievements {}/{}", summary.earned_count(), summary.achievements.len())?;
    for achievement in &summary.achievements {
        writeln!(
            out,
            "  [{}] {} {} - {}",
            if achievement.earned { "x" } else { " " },
            achievement.kind.icon(),
            achievement.kind.name(),
            achievement.kind.description()
        )?;
    }
    writeln!(out)?;
    writeln!(out, "{}", summary.final_message)
}

/// Clipboard tools tried in order, with their arguments.
type ToolList = &'static [(&'static str, &'static [&'static str])];

const CLIPBOARD_TOOLS: ToolList = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Pipes text into the first platform clipboard tool that accepts it.
struct SystemClipboard {
    tools: ToolList,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self {
            tools: CLIPBOARD_TOOLS,
        }
    }
}

impl CopyTarget for SystemClipboard {
    fn name(&self) -> &str {
        "system clipboard"
    }

    fn copy_text(&mut self, text: &str) -> io::Result<()> {
        let mut last_err = io::Error::new(io::ErrorKind::NotFound, "no clipboard tool found");
        for (program, args) in self.tools {
            let child = Command::new(program)
                .args(*args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();
            let mut child = match child {
                Ok(child) => child,
                Err(e) => {
                    last_err = e;
                    continue;
                }
            };
            let written = match child.stdin.take() {
                Some(mut stdin) => stdin.write_all(text.as_bytes()),
                None => Err(io::Error::new(io::ErrorKind::BrokenPipe, "no stdin")),
            };
            let status = child.wait();
            if let Err(e) = written {
                last_err = e;
                continue;
            }
            match status {
                Ok(status) if status.success() => return Ok(()),
                Ok(_) => {
                    last_err = io::Error::new(
                        io::ErrorKind::Other,
                        format!("{} exited with failure", program),
                    )
                }
                Err(e) => last_err = e,
            }
        }
        Err(last_err)
    }
}

/// Writes the text to a file the player can open and select from.
struct FileDrop {
    path: PathBuf,
}

impl CopyTarget for FileDrop {
    fn name(&self) -> &str {
        "result file"
    }

    fn copy_text(&mut self, text: &str) -> io::Result<()> {
        fs::write(&self.path, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_rules::{judge, regular_challenge, ScoreTable};
    use std::io::Cursor;

    fn terminal(input: &str, config: QuestConfig) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal {
            machine: QuestMachine::new(config),
            rng: StdRng::seed_from_u64(3),
            input: Cursor::new(input.as_bytes().to_vec()),
            out: Vec::new(),
            no_delay: true,
            json: false,
            preset_genre: Some(Genre::Fantasy),
            clipboard: SystemClipboard::default(),
        }
    }

    #[test]
    fn test_parse_option() {
        assert_eq!(parse_option("a"), Some(0));
        assert_eq!(parse_option("D"), Some(3));
        assert_eq!(parse_option("2"), Some(1));
        assert_eq!(parse_option("E"), None);
        assert_eq!(parse_option("ab"), None);
        assert_eq!(parse_option(""), None);
    }

    #[test]
    fn test_play_again_shows_opening_story() {
        let first = regular_challenge(0).instantiate("");
        let wrong = (0..first.options.len())
            .find(|i| judge(&first, *i) == Verdict::Wrong)
            .unwrap();
        let config = QuestConfig {
            score_table: ScoreTable {
                correct: 100,
                close: 250,
                wrong: 1000,
            },
            ..QuestConfig::default()
        };
        let input = format!("{}\np\nq\n", Challenge::option_label(wrong));

        let mut game = terminal(&input, config);
        game.run().unwrap();

        let output = String::from_utf8(game.out).unwrap();
        let opening = Genre::Fantasy.profile().opening_story;
        assert_eq!(output.matches(opening).count(), 2);
        assert!(output.contains("KILO-JOURNEY COMPLETE"));
        assert_eq!(game.machine.phase(), Phase::InRound);
        assert_eq!(game.machine.session().unwrap().steps, 1000);
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut game = terminal("", QuestConfig::default());
        game.run().unwrap();

        let output = String::from_utf8(game.out).unwrap();
        assert!(output.ends_with("Farewell, kilo-traveler.\n"));
    }

    #[cfg(unix)]
    #[test]
    fn test_clipboard_tries_next_tool_after_failure() {
        let mut clipboard = SystemClipboard {
            tools: &[("false", &[]), ("cat", &[])],
        };
        assert!(clipboard.copy_text("kilo").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_clipboard_reports_last_failure() {
        let mut clipboard = SystemClipboard {
            tools: &[("kiloquest-missing-tool", &[])],
        };
        let err = clipboard.copy_text("kilo").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);

        let mut failing = SystemClipboard {
            tools: &[("kiloquest-missing-tool", &[]), ("false", &[])],
        };
        // either the write or the exit status fails, never the lookup
        let err = failing.copy_text("kilo").unwrap_err();
        assert_ne!(err.kind(), io::ErrorKind::NotFound);
    }
}
