//! Interactive console session
//!
//! Line-oriented front end over [`Console`]: open a dictionary, enter
//! records through the form controller, print the table. Records only live
//! as long as the session.

use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::application::{Console, Outcome};
use crate::domain::{FieldDraft, FieldKindChoice, ServiceResult};
use crate::schema_form::FormControl;

const HELP: &str = "\
Commands:
  list                               list dictionaries
  create <name>                      create a dictionary
  fields <dictionary>                list fields of a dictionary
  add-field <dictionary> <field> <kind> [required] [target]
                                     kind: Object Array String Number Integer Boolean Null ref
  open <dictionary>                  open a dictionary (records start empty)
                                     names with spaces may be written as-is or \"quoted\"
  table                              print the record table
  new                                start a new record
  set <field> [value...]             edit the draft (no value = unset)
  save                               append the draft to the records
  cancel                             discard the draft
  help                               this text
  quit                               leave the shell";

/// What a line asked the shell to do next
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    console: Console,
}

impl Shell {
    pub fn new(console: Console) -> Self {
        Self { console }
    }

    /// Read commands until EOF or `quit`
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        writeln!(out, "lexicon shell, type 'help' for commands")?;
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if self.execute(line.trim_end_matches('\r'), out).await? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    async fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> std::io::Result<Flow> {
        let line = line.trim_start();
        // `rest` keeps its trailing whitespace for `set`; names use `name`
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim_start()),
            None => (line.trim_end(), ""),
        };
        let name = unquote(rest.trim());

        match command {
            "" => {}
            "help" => writeln!(out, "{}", HELP)?,
            "quit" | "exit" => return Ok(Flow::Quit),
            "list" => {
                let result = self.console.reload_dictionaries().await;
                if report(out, result)? {
                    for name in self.console.workspace().dictionaries() {
                        writeln!(out, "  {}", name)?;
                    }
                }
            }
            "create" => {
                let result = self.console.create_dictionary(name).await;
                report(out, result)?;
            }
            "fields" => match Some(name).filter(|n| !n.is_empty()) {
                Some(dictionary) => {
                    let result = self.console.reload_properties(dictionary).await;
                    if report(out, result)? {
                        for name in self.console.workspace().properties_of(dictionary) {
                            writeln!(out, "  {}", name)?;
                        }
                    }
                }
                None => writeln!(out, "usage: fields <dictionary>")?,
            },
            "add-field" => self.add_field(&split_args(rest), out).await?,
            "open" => match Some(name).filter(|n| !n.is_empty()) {
                Some(dictionary) => {
                    let result = self.console.open_dictionary(dictionary).await;
                    if report(out, result)? {
                        self.print_table(out)?;
                    }
                }
                None => writeln!(out, "usage: open <dictionary>")?,
            },
            "table" => self.print_table(out)?,
            "new" => {
                if self.console.begin_record() == Outcome::Skipped {
                    writeln!(out, "open a dictionary first")?;
                } else {
                    self.print_form(out)?;
                }
            }
            "set" => {
                // the value is everything after the separating space, verbatim
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value),
                    None => (rest.trim_end(), ""),
                };
                if field.is_empty() {
                    writeln!(out, "usage: set <field> [value...]")?;
                } else if self.console.set_field(field, value) == Outcome::Skipped {
                    writeln!(out, "no record in progress, use 'new'")?;
                }
            }
            "save" => match self.console.save_record() {
                Some(_) => self.print_table(out)?,
                None => writeln!(out, "no record in progress")?,
            },
            "cancel" => {
                if self.console.cancel_record() == Outcome::Skipped {
                    writeln!(out, "no record in progress")?;
                }
            }
            other => writeln!(out, "unknown command '{}', try 'help'", other)?,
        }

        Ok(Flow::Continue)
    }

    async fn add_field<W: Write>(&mut self, args: &[String], out: &mut W) -> std::io::Result<()> {
        let (dictionary, field, kind) = match args {
            [dictionary, field, kind, ..] => (dictionary.as_str(), field.as_str(), kind.as_str()),
            _ => {
                writeln!(out, "usage: add-field <dictionary> <field> <kind> [required] [target]")?;
                return Ok(());
            }
        };

        let kind = match kind.parse::<FieldKindChoice>() {
            Ok(kind) => kind,
            Err(e) => {
                writeln!(out, "{}", e)?;
                return Ok(());
            }
        };

        let mut draft = FieldDraft::new(field, kind);
        for extra in &args[3..] {
            if extra == "required" {
                draft.required = true;
            } else {
                draft.ref_target = extra.clone();
            }
        }

        let result = self.console.add_field(dictionary, &draft).await;
        report(out, result)?;
        Ok(())
    }

    fn print_table<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let workspace = self.console.workspace();
        match (workspace.current_name(), workspace.table()) {
            (Some(name), Some(table)) => {
                writeln!(out, "[{}]", name)?;
                write!(out, "{}", table)
            }
            _ => writeln!(out, "no dictionary open"),
        }
    }

    fn print_form<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let Some(form) = self.console.workspace().form() else {
            return Ok(());
        };
        writeln!(out, "new record, fields:")?;
        for field in form.fields() {
            let hint = match field.control {
                FormControl::ReferenceInput => format!(
                    "id in {}",
                    field.descriptor.ref_target.as_deref().unwrap_or("?")
                ),
                FormControl::TextInput => "text".to_string(),
                FormControl::NumberInput => "number".to_string(),
                FormControl::TriStateSelect => "true | false | (empty)".to_string(),
                FormControl::RawTextArea => "raw text".to_string(),
            };
            writeln!(
                out,
                "  {} <{}>{}: {}",
                field.descriptor.name,
                field.descriptor.kind,
                if field.descriptor.required { " *" } else { "" },
                hint
            )?;
        }
        Ok(())
    }
}

/// Strip one pair of surrounding double quotes
fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(s)
}

/// Whitespace-separated arguments; `"..."` groups words into one argument
fn split_args(input: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut pending = false;

    for c in input.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            c if c.is_whitespace() && !quoted => {
                if pending {
                    args.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }
    if pending {
        args.push(current);
    }
    args
}

/// Print the outcome of a service intent; `true` when it was applied
fn report<W: Write>(out: &mut W, result: ServiceResult<Outcome>) -> std::io::Result<bool> {
    match result {
        Ok(Outcome::Applied) => Ok(true),
        Ok(Outcome::Skipped) => {
            writeln!(out, "nothing to do")?;
            Ok(false)
        }
        Err(e) => {
            writeln!(out, "error: {}", e)?;
            Ok(false)
        }
    }
}
