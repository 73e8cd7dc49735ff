/// One line typed at the REPL prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    List,
    Open(String),
    New(String),
    Remove(String),
    Show,
    Edit,
    Save,
    Examples,
    /// 1-based, as listed by `examples`
    Example(usize),
    Run,
    Clear,
    Status,
    Cursor(usize),
    Help,
    Quit,
    Empty,
}

pub const HELP: &str = "Commands: ls, open <file>, new <file>, rm <file>, show, edit, save, \
examples, example <n>, run, clear, status, cursor <offset>, help, quit";

/// Split a REPL line with shell quoting rules so `new "my file.c"` works.
pub fn parse_command(line: &str) -> Result<ReplCommand, String> {
    let words = shlex::split(line).ok_or_else(|| "Unbalanced quotes".to_string())?;
    let mut words = words.into_iter();

    let Some(head) = words.next() else {
        return Ok(ReplCommand::Empty);
    };
    let arg = words.next();

    let need = |what: &str| format!("Usage: {} <{}>", head, what);

    let cmd = match head.as_str() {
        "ls" | "files" => ReplCommand::List,
        "open" | "o" => ReplCommand::Open(arg.ok_or_else(|| need("file"))?),
        "new" | "n" => ReplCommand::New(arg.ok_or_else(|| need("file"))?),
        "rm" | "delete" => ReplCommand::Remove(arg.ok_or_else(|| need("file"))?),
        "show" | "cat" => ReplCommand::Show,
        "edit" | "e" => ReplCommand::Edit,
        "save" | "s" => ReplCommand::Save,
        "examples" => ReplCommand::Examples,
        "example" | "ex" => {
            let n = arg.ok_or_else(|| need("n"))?;
            match n.parse::<usize>() {
                Ok(n) if n > 0 => ReplCommand::Example(n),
                _ => return Err(format!("Invalid example number: {}", n)),
            }
        }
        "run" | "r" | "compile" => ReplCommand::Run,
        "clear" => ReplCommand::Clear,
        "status" => ReplCommand::Status,
        "cursor" => {
            let n = arg.ok_or_else(|| need("offset"))?;
            let offset = n
                .parse::<usize>()
                .map_err(|_| format!("Invalid offset: {}", n))?;
            ReplCommand::Cursor(offset)
        }
        "help" | "h" | "?" => ReplCommand::Help,
        "quit" | "q" | "exit" => ReplCommand::Quit,
        other => return Err(format!("Unknown command: {} (try 'help')", other)),
    };
    Ok(cmd)
}
