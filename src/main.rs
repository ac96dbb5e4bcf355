use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use stuttz::advice::{GeminiClient, TextGenerator};
use stuttz::config::{APP_NAME, Settings};
use stuttz::messages::WELCOME;
use stuttz::model::AppState;
use stuttz::store::ProgressStore;
use stuttz::StuttzApp;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stuttz", version, about = "Roadmap de estudo com XP, níveis e dicas por IA")]
struct Cli {
    /// Directorio donde se guardan user_data.json y roadmap_data.json
    #[arg(long, env = "STUTTZ_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// No usar el servicio de IA aunque haya clave configurada
    #[arg(long)]
    offline: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Roadmap,
    Status,
    Open(u32),
    Back,
    Select(usize),
    Submit,
    Tip,
    Explain,
    Next,
    Help,
    Quit,
}

// Las opciones se escriben 1..=4 y se guardan como índice 0-based
fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Err("Comando vazio. Digite 'ajuda'.".into());
    };
    let arg = parts.next();
    let number = |what: &str| -> Result<u64, String> {
        arg.ok_or_else(|| format!("Informe {what}."))?
            .parse::<u64>()
            .map_err(|_| format!("'{}' não é um número válido.", arg.unwrap_or_default()))
    };

    match verb.to_lowercase().as_str() {
        "mapa" | "roadmap" => Ok(Command::Roadmap),
        "status" | "perfil" => Ok(Command::Status),
        "abrir" | "open" => {
            let id = number("o número da fase")?;
            u32::try_from(id)
                .map(Command::Open)
                .map_err(|_| "Número de fase muito grande.".to_string())
        }
        "voltar" | "back" => Ok(Command::Back),
        "opcao" | "opção" | "select" => match number("o número da opção")? {
            0 => Err("As opções começam em 1.".into()),
            n => Ok(Command::Select(n as usize - 1)),
        },
        "confirmar" | "submit" => Ok(Command::Submit),
        "dica" | "tip" => Ok(Command::Tip),
        "explicar" | "explain" => Ok(Command::Explain),
        "proximos" | "próximos" | "next" => Ok(Command::Next),
        "ajuda" | "help" | "?" => Ok(Command::Help),
        "sair" | "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("Comando desconhecido: '{other}'. Digite 'ajuda'.")),
    }
}

const HELP: &str = "\
Comandos:
  mapa                mostra o roadmap
  status              mostra nível, XP e sequência
  abrir <fase>        abre uma fase desbloqueada
  voltar              volta ao roadmap
  opcao <1-4>         escolhe uma opção do quiz
  confirmar           confirma a resposta
  dica                gera uma dica de estudo
  explicar            explica a resposta correta
  proximos            sugere próximos passos
  sair                encerra";

fn render_roadmap(app: &StuttzApp, out: &mut impl Write) -> io::Result<()> {
    let roadmap = app.roadmap();
    writeln!(out, "\n🗺️  {} ({:.0}% concluído)", roadmap.course_name, app.course_progress())?;
    for info in app.phase_infos() {
        writeln!(out, "  {}", info.label())?;
        writeln!(out, "      {}", info.description)?;
    }
    Ok(())
}

fn render_status(app: &StuttzApp, out: &mut impl Write) -> io::Result<()> {
    let card = app.user_card();
    writeln!(
        out,
        "\n👤 {} | {} | {} | {}",
        card.name,
        card.level_label(),
        card.xp_label(),
        card.streak_label()
    )
}

fn render_phase(app: &StuttzApp, out: &mut impl Write) -> io::Result<()> {
    let Some(phase) = app.active_phase() else {
        return Ok(());
    };
    writeln!(out, "\n📘 Fase {}: {}", phase.id, phase.title)?;
    writeln!(out, "{}", phase.description)?;
    writeln!(out, "\nTarefas:")?;
    for task in &phase.tasks {
        let mark = if phase.status == stuttz::model::PhaseStatus::Completed {
            "✅"
        } else {
            "⬜"
        };
        writeln!(out, "  {mark} {task}")?;
    }
    writeln!(out, "\n❓ {}", phase.quiz.question)?;
    let selected = app.quiz_state.selected_option;
    for (i, option) in phase.quiz.options.iter().enumerate() {
        let cursor = if selected == Some(i) { ">" } else { " " };
        writeln!(out, " {cursor} {}) {option}", i + 1)?;
    }
    match app.quiz_state.last_outcome {
        Some(true) => writeln!(out, "\n✅ Respondido corretamente")?,
        Some(false) => writeln!(out, "\n❌ Tente novamente")?,
        None => {}
    }
    Ok(())
}

fn flush_messages(app: &mut StuttzApp, out: &mut impl Write) -> io::Result<()> {
    for message in app.take_messages() {
        writeln!(out, "💬 {message}")?;
    }
    Ok(())
}

fn run_command(app: &mut StuttzApp, command: Command, out: &mut impl Write) -> io::Result<bool> {
    match command {
        Command::Roadmap => render_roadmap(app, out)?,
        Command::Status => render_status(app, out)?,
        Command::Open(id) => {
            if app.select_phase(id) {
                render_phase(app, out)?;
            }
        }
        Command::Back => {
            app.go_back();
            render_roadmap(app, out)?;
        }
        Command::Select(idx) => {
            if app.state == AppState::Roadmap {
                writeln!(out, "Abra uma fase primeiro.")?;
            } else {
                app.select_option(idx);
                render_phase(app, out)?;
            }
        }
        Command::Submit => {
            if app.state == AppState::Roadmap {
                writeln!(out, "Abra uma fase primeiro.")?;
            } else if app.submit_answer().is_some() {
                render_phase(app, out)?;
            }
        }
        Command::Tip => match app.request_study_tip() {
            Some(tip) => writeln!(out, "\n💡 {tip}")?,
            None => writeln!(out, "Abra uma fase primeiro.")?,
        },
        Command::Explain => match app.request_explanation() {
            Some(text) => writeln!(out, "\n🤖 Explicação:\n{text}")?,
            None => writeln!(out, "Abra uma fase primeiro.")?,
        },
        Command::Next => writeln!(out, "\n🧭 {}", app.suggest_next_steps())?,
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(false),
    }
    flush_messages(app, out)?;
    Ok(true)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = Settings::from_env();
    if let Some(dir) = cli.data_dir {
        settings.data_dir = dir;
    }

    let store = ProgressStore::open(&settings).context("embedded roadmap seed is invalid")?;
    let generator: Option<Box<dyn TextGenerator>> = if cli.offline {
        None
    } else {
        GeminiClient::from_settings(&settings).map(|c| Box::new(c) as Box<dyn TextGenerator>)
    };

    log::info!("🚀 Iniciando {APP_NAME}...");
    let mut app = StuttzApp::new(store, generator);
    app.start_session();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{WELCOME}")?;
    render_status(&app, &mut out)?;
    render_roadmap(&app, &mut out)?;
    flush_messages(&mut app, &mut out)?;

    let stdin = io::stdin();
    loop {
        write!(out, "\n> ")?;
        out.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("reading stdin")? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(command) => {
                if !run_command(&mut app, command, &mut out)? {
                    break;
                }
            }
            Err(message) => writeln!(out, "{message}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_accept_portuguese_and_english() {
        assert_eq!(parse_command("abrir 2"), Ok(Command::Open(2)));
        assert_eq!(parse_command("open 1"), Ok(Command::Open(1)));
        assert_eq!(parse_command("  VOLTAR "), Ok(Command::Back));
        assert_eq!(parse_command("sair"), Ok(Command::Quit));
    }

    #[test]
    fn options_are_one_based() {
        assert_eq!(parse_command("opcao 2"), Ok(Command::Select(1)));
        assert!(parse_command("opcao 0").is_err());
        assert!(parse_command("opcao x").is_err());
        assert!(parse_command("opcao").is_err());
    }

    #[test]
    fn wrong_answer_is_rendered_under_the_quiz() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProgressStore::open_at(
            dir.path().join("user_data.json"),
            dir.path().join("roadmap_data.json"),
        )
        .unwrap();
        let mut app = StuttzApp::new(store, None);
        app.select_phase(1);

        let mut before = Vec::new();
        render_phase(&app, &mut before).unwrap();
        assert!(!String::from_utf8(before).unwrap().contains("Tente novamente"));

        app.select_option(0);
        app.submit_answer();
        let mut after = Vec::new();
        render_phase(&app, &mut after).unwrap();
        assert!(String::from_utf8(after).unwrap().contains("❌ Tente novamente"));
    }

    #[test]
    fn unknown_command_is_reported() {
        let err = parse_command("voar").unwrap_err();
        assert!(err.contains("voar"));
    }

    #[test]
    fn quiz_round_trip_through_commands() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProgressStore::open_at(
            dir.path().join("user_data.json"),
            dir.path().join("roadmap_data.json"),
        )
        .unwrap();
        let mut app = StuttzApp::new(store, None);
        let mut out = Vec::new();

        for line in ["abrir 1", "opcao 2", "confirmar"] {
            let command = parse_command(line).unwrap();
            assert!(run_command(&mut app, command, &mut out).unwrap());
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Resposta correta"));
        assert!(text.contains("✅ Respondido corretamente"));
        assert!(text.contains("Nova fase desbloqueada"));
        assert_eq!(app.user().xp, 25);
        assert!(!run_command(&mut app, Command::Quit, &mut Vec::new()).unwrap());
    }
}
