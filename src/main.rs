mod cli;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use aws_quiz_prep::infrastructure::PlainTextExtractor;
use aws_quiz_prep::models::{load_corpus, Letter};
use aws_quiz_prep::orchestrator::{build_dictionary_file, run_enhancement_pass, run_ingest};
use aws_quiz_prep::services::answer_extractor;
use aws_quiz_prep::utils::logging;
use aws_quiz_prep::workflow::{find_question, grade, QuizSession};
use aws_quiz_prep::{Config, DisplayMode, DisplayQuestion, LanguageSelector, WrongNoteWriter};
use clap::Parser;
use cli::{Cli, Commands};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("无法加载配置文件: {}", path.display()))?,
        None => Config::from_env(),
    };
    config.verbose_logging |= cli.verbose;

    // 初始化日志
    logging::init(config.verbose_logging);

    match cli.command {
        Commands::Ingest { files, output } => {
            logging::log_startup("导入题库");
            let output = output.unwrap_or_else(|| config.corpus_path.clone().into());
            run_ingest(&PlainTextExtractor::new(), &files, &output).await?;
        }
        Commands::BuildDict { output } => {
            logging::log_startup("生成翻译词典");
            let output = output.unwrap_or_else(|| config.translations_path.clone().into());
            build_dictionary_file(Path::new(&config.corpus_path), &output).await?;
        }
        Commands::Enhance => {
            logging::log_startup("增强题库");
            run_enhancement_pass(
                Path::new(&config.corpus_path),
                Path::new(&config.translations_path),
                config.verbose_logging,
            )
            .await?;
        }
        Commands::Show { id, mode, answer } => {
            let questions = load_corpus(Path::new(&config.corpus_path)).await?;
            let question = find_question(&questions, &id)?;

            let mut selector = build_selector(mode.unwrap_or(config.display_mode), config.mixed_seed);
            let shown = selector.select_question(question);
            let multiple =
                answer_extractor::is_multiple_any(&question.question_en, &question.question_ko);

            println!("{}", render_question(&question.id, &shown, multiple));
            if let Some(image_path) = &question.image_path {
                println!("Image: {}", image_path);
            }
            if answer {
                println!("Answer: {}", question.answer);
            }
        }
        Commands::Quiz { mode, seed } => {
            let questions = load_corpus(Path::new(&config.corpus_path)).await?;
            let mode = mode.unwrap_or(config.display_mode);
            let selector = build_selector(mode, seed.or(config.mixed_seed));
            run_quiz(QuizSession::new(questions)?, selector, &config)?;
        }
    }

    Ok(())
}

fn build_selector(mode: DisplayMode, seed: Option<u64>) -> LanguageSelector<StdRng> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    LanguageSelector::new(mode, rng)
}

fn render_question(id: &str, shown: &DisplayQuestion, multiple: bool) -> String {
    let mut out = format!("[{}] {}\n", id, shown.body);
    if multiple {
        out.push_str("(multiple answers)\n");
    }
    for (letter, text) in shown.choices.sorted() {
        out.push_str(&format!("  {}. {}\n", letter, text));
    }
    if shown.is_mismatched() {
        out.push_str("  * choices shown in a different language\n");
    }
    out
}

/// 解析输入的字母，如 "A" / "a,c" / "B D"
fn parse_selection(input: &str) -> Vec<Letter> {
    input
        .chars()
        .filter_map(|c| Letter::from_char(c.to_ascii_uppercase()))
        .collect()
}

fn run_quiz(
    mut session: QuizSession,
    mut selector: LanguageSelector<StdRng>,
    config: &Config,
) -> Result<()> {
    info!("📚 共 {} 道题目，显示模式: {}", session.len(), selector.mode());
    println!("Enter letters to answer (e.g. A or A,C), 'r' to reveal, 'q' to quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut answered = 0usize;
    let mut correct = 0usize;

    'quiz: loop {
        let question = session.current().clone();
        let shown = selector.select_question(&question);
        let multiple =
            answer_extractor::is_multiple_any(&question.question_en, &question.question_ko);
        let answer_key = answer_extractor::extract(Some(&question.answer))
            .map(|key| key.restrict_to(&shown.choices));

        println!("\n{} {}", session, render_question(&question.id, &shown, multiple));
        if let Some(image_path) = &question.image_path {
            println!("Image: {}", image_path);
        }

        loop {
            print!("> ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                break 'quiz;
            };
            let input = line?.trim().to_string();

            match input.as_str() {
                "q" | "Q" => break 'quiz,
                "r" | "R" => {
                    session.reveal();
                    println!("Answer: {}", question.answer);
                }
                _ => {
                    let selected = parse_selection(&input);
                    if selected.is_empty() {
                        continue;
                    }
                    let is_correct = grade(answer_key.as_ref(), &selected);
                    answered += 1;
                    if is_correct {
                        correct += 1;
                        println!("✓ Correct");
                    } else {
                        println!("✗ Wrong. Answer: {}", question.answer);
                    }
                    session.record(is_correct);
                    break;
                }
            }
        }
    }

    println!("\nScore: {}/{}", correct, answered);

    let wrong = session.wrong_questions();
    let written = WrongNoteWriter::with_path(&config.wrong_note_path).write(&wrong)?;
    if written > 0 {
        info!("✓ 已写入 {} 道错题至: {}", written, config.wrong_note_path);
    }

    Ok(())
}
