//! Interactive mode: line commands on stdin drive the projection

use std::io::{self, BufRead};

use crate::output::{print_catalog, print_commands, print_error, print_warning};
use crate::projection::{Adjustment, ProjectionModel, resolve_adjustment};

use super::{ViewOptions, print_view, render_chart};

/// One parsed user command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Toggle(&'static str),
    Reset,
    IncreaseRange,
    DecreaseRange,
    IncreaseScale,
    DecreaseScale,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Whether the command changes the projection state
    fn mutates(self) -> bool {
        !matches!(self, Command::Show | Command::Help | Command::Quit)
    }
}

/// Parse a command line. Returns Ok(None) for blank input.
pub(crate) fn parse_command(
    catalog: &'static [Adjustment],
    line: &str,
) -> Result<Option<Command>, String> {
    let normalized = line.trim().to_lowercase();
    if normalized.is_empty() {
        return Ok(None);
    }

    let command = match normalized.as_str() {
        "reset" | "r" => Command::Reset,
        "+" | "years+" | "right" => Command::IncreaseRange,
        "-" | "years-" | "left" => Command::DecreaseRange,
        "up" | "scale+" => Command::IncreaseScale,
        "down" | "scale-" => Command::DecreaseScale,
        "show" | "s" => Command::Show,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => {
            let token = other.strip_prefix("toggle ").unwrap_or(other);
            let id = resolve_adjustment(catalog, token)
                .ok_or_else(|| format!("Unknown command: {}", line.trim()))?;
            Command::Toggle(id)
        }
    };

    Ok(Some(command))
}

/// Apply a mutating command to the model
pub(crate) fn apply_command(model: &mut ProjectionModel, command: Command) {
    match command {
        Command::Toggle(id) => {
            let known = model.toggle_adjustment(id);
            debug_assert!(known, "parse_command resolved unknown fix {}", id);
        }
        Command::Reset => model.reset_adjustments(),
        Command::IncreaseRange => model.increase_range(),
        Command::DecreaseRange => model.decrease_range(),
        Command::IncreaseScale => model.increase_scale(),
        Command::DecreaseScale => model.decrease_scale(),
        Command::Show | Command::Help | Command::Quit => {}
    }
}

/// Run an interactive session reading commands from stdin
pub fn run_interactive(model: ProjectionModel, options: &ViewOptions) {
    let stdin = io::stdin();
    if let Err(e) = run_session(model, stdin.lock(), options) {
        print_error(&e);
        std::process::exit(1);
    }
}

fn run_session<R: BufRead>(
    mut model: ProjectionModel,
    input: R,
    options: &ViewOptions,
) -> Result<ProjectionModel, String> {
    if !options.quiet {
        print_catalog(&model);
        print_commands();
    }
    print_view(&model, options.quiet);
    save_chart(&model, options.image_path);

    for line in input.lines() {
        let line = line.map_err(|e| format!("Failed to read input: {}", e))?;
        let command = match parse_command(model.catalog(), &line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                print_warning(&e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                print_commands();
                continue;
            }
            _ => {}
        }

        if command.mutates() {
            apply_command(&mut model, command);
        }
        println!();
        print_view(&model, options.quiet);
        if command.mutates() {
            save_chart(&model, options.image_path);
        }
    }

    Ok(model)
}

/// Re-render the chart after a change. Failures are reported but do not
/// end the session.
fn save_chart(model: &ProjectionModel, image_path: Option<&str>) {
    if let Some(path) = image_path {
        match render_chart(model, path) {
            Ok(()) => eprintln!("Chart saved to: {}", path),
            Err(e) => print_error(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::get_adjustments;

    fn parse(line: &str) -> Result<Option<Command>, String> {
        parse_command(get_adjustments(), line)
    }

    #[test]
    fn test_parse_toggle_forms() {
        assert_eq!(parse("1"), Ok(Some(Command::Toggle("fix 1"))));
        assert_eq!(parse("fix 2"), Ok(Some(Command::Toggle("fix 2"))));
        assert_eq!(parse("  FIX3 "), Ok(Some(Command::Toggle("fix 3"))));
        assert_eq!(parse("toggle fix 1"), Ok(Some(Command::Toggle("fix 1"))));
    }

    #[test]
    fn test_parse_counter_commands() {
        assert_eq!(parse("+"), Ok(Some(Command::IncreaseRange)));
        assert_eq!(parse("left"), Ok(Some(Command::DecreaseRange)));
        assert_eq!(parse("UP"), Ok(Some(Command::IncreaseScale)));
        assert_eq!(parse("scale-"), Ok(Some(Command::DecreaseScale)));
        assert_eq!(parse("r"), Ok(Some(Command::Reset)));
        assert_eq!(parse("q"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn test_parse_blank_and_unknown() {
        assert_eq!(parse("   "), Ok(None));
        let err = parse("fix 7").unwrap_err();
        assert!(err.contains("Unknown command: fix 7"), "got {}", err);
    }

    #[test]
    fn test_command_mutates() {
        assert!(Command::Reset.mutates());
        assert!(Command::Toggle("fix 1").mutates());
        assert!(!Command::Show.mutates());
        assert!(!Command::Quit.mutates());
    }

    #[test]
    fn test_session_applies_commands_in_order() {
        let input = "1\n3\n+\n+\nup\nbogus\n\n3\nq\n2\n";
        let options = ViewOptions {
            quiet: true,
            image_path: None,
        };
        let model = run_session(ProjectionModel::default(), input.as_bytes(), &options).unwrap();

        // "2" after quit is never read
        let ids: Vec<_> = model.selected().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["fix 1"]);
        assert_eq!(model.range_size(), 6);
        assert_eq!(model.scale_base(), 150);
    }

    #[test]
    fn test_session_ends_at_end_of_input() {
        let options = ViewOptions {
            quiet: true,
            image_path: None,
        };
        let model =
            run_session(ProjectionModel::default(), "-\n-\n-\n-\n-\n".as_bytes(), &options)
                .unwrap();
        assert_eq!(model.range_size(), 1);
    }

    #[test]
    fn test_apply_parsed_toggle_changes_selection() {
        let mut model = ProjectionModel::default();
        for line in ["fix 3", "1", "toggle fix 3"] {
            let command = parse(line).unwrap().unwrap();
            apply_command(&mut model, command);
        }
        let ids: Vec<_> = model.selected().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["fix 1"]);
    }

    #[test]
    fn test_apply_reset_keeps_counters() {
        let mut model = ProjectionModel::default();
        apply_command(&mut model, Command::Toggle("fix 2"));
        apply_command(&mut model, Command::DecreaseScale);
        apply_command(&mut model, Command::Reset);
        assert!(model.selected().is_empty());
        assert_eq!(model.scale_base(), 50);
    }
}
