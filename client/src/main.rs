//! Terminal client entry point
//!
//! Builds the form from command line flags, streams one generation, then
//! drops into a small session prompt where names can be disliked, copied,
//! and the request resubmitted with the updated exclusions.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use url::Url;

use client::services::format_copy_summary;
use client::{
    ClipboardWriter, FormValues, RealClipboardWriter, RealResultView, RealStreamOpener,
    ResultController, ResultView, StreamOpener, form,
};
use shared::{Gender, NameLength, ProcessId, logging};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "client")]
#[command(about = "Terminal client for the name suggestion stream")]
struct Args {
    /// Generation endpoint base URL
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    endpoint: Url,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Desired gender (male, female, neutral)
    #[arg(long)]
    gender: Option<Gender>,

    /// Desired meanings; repeat or comma-separate, ALL selects every preset
    #[arg(long = "meaning", value_delimiter = ',')]
    meanings: Vec<String>,

    /// Cultural sources; repeat or comma-separate, ALL selects every preset
    #[arg(long = "source", value_delimiter = ',')]
    sources: Vec<String>,

    /// Newline-delimited file with extra meanings to merge in
    #[arg(long)]
    meanings_file: Option<PathBuf>,

    /// Characters to avoid (comma or space separated)
    #[arg(long, default_value = "")]
    avoid_chars: String,

    /// Sounds to avoid (comma or space separated)
    #[arg(long, default_value = "")]
    avoid_sounds: String,

    /// How many suggestions to request
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(3..=20))]
    count: u8,

    /// Name length (single, double, any)
    #[arg(long, default_value = "any")]
    name_length: NameLength,

    /// Exit after the first generation instead of entering the session prompt
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    ProcessId::init_client();
    logging::init_tracing_with_level(Some(&args.log_level));

    let mut form = FormValues {
        gender: args.gender,
        meanings: args.meanings.clone(),
        cultural_source: args.sources.clone(),
        avoid_characters: args.avoid_chars.clone(),
        avoid_sounds: args.avoid_sounds.clone(),
        count: args.count,
        name_length: args.name_length,
    };

    if let Some(path) = &args.meanings_file {
        match form::import_meanings(path) {
            Ok(imported) => {
                println!("📄 寓意导入成功（{} 条）", imported.len());
                form::merge_meanings(&mut form, imported);
            }
            Err(e) => {
                logging::log_error(ProcessId::current(), "Meaning import", &e);
                eprintln!("❌ 文件格式不正确：{e}");
            }
        }
    }

    let opener = RealStreamOpener::new(args.endpoint.clone());
    let view = RealResultView::new();
    let clipboard = RealClipboardWriter::new();
    let mut controller = ResultController::new(opener, view);

    run_generation(&mut controller, &form).await;

    if args.once {
        controller.dispose();
        return Ok(());
    }

    println!();
    println!("输入 /help 查看命令，/quit 退出。");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break; // EOF
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, argument) = match input.split_once(' ') {
            Some((command, argument)) => (command, argument.trim()),
            None => (input, ""),
        };

        match command {
            "/quit" | "/exit" | "/q" => break,
            "/again" | "/a" => run_generation(&mut controller, &form).await,
            "/dislike" => {
                if argument.is_empty() {
                    println!("用法：/dislike <名字>");
                } else if !controller.mark_disliked(argument) {
                    println!("已标记过「{argument}」");
                }
            }
            "/copy" => copy_result(&controller, &clipboard, argument),
            "/help" => {
                println!();
                println!("命令：");
                println!("  /again          - 重新生成（排除已标记的名字）");
                println!("  /dislike <名字> - 标记不喜欢");
                println!("  /copy <序号>    - 复制对应结果");
                println!("  /quit           - 退出");
                println!();
            }
            _ => println!("未知命令，输入 /help 查看用法"),
        }
    }

    controller.dispose();
    Ok(())
}

/// Submit the form and render the stream to completion
async fn run_generation<S, V>(controller: &mut ResultController<S, V>, form: &FormValues)
where
    S: StreamOpener,
    V: ResultView,
{
    println!("⏳ 正在生成名字...");
    if controller.submit(form).await.is_ok() {
        controller.run_to_completion().await;
    }
}

/// Copy one rendered result (1-based index) to the clipboard
fn copy_result<S, V>(controller: &ResultController<S, V>, clipboard: &dyn ClipboardWriter, argument: &str)
where
    S: StreamOpener,
    V: ResultView,
{
    let index: usize = match argument.parse() {
        Ok(index) => index,
        Err(_) => {
            println!("用法：/copy <序号>（从 1 开始）");
            return;
        }
    };

    match index.checked_sub(1).and_then(|i| controller.results().get(i)) {
        Some(result) => match clipboard.write_text(&format_copy_summary(result)) {
            Ok(()) => println!("📋 复制成功！"),
            Err(e) => eprintln!("❌ 复制失败，请手动复制（{e}）"),
        },
        None => println!("没有第 {index} 个结果"),
    }
}
