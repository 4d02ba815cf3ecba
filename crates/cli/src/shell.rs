//! Line-oriented interactive shell.
//!
//! Reads one command per line from `input` and writes prompts and results to
//! `output`. End of input behaves like `quit` at every prompt.

use anyhow::{Context, Result};
use docket_core::{NewTodo, Owner, TodoPatch};
use docket_store::DocumentStore;
use std::io::{BufRead, Write};
use std::sync::Arc;

const RULE: &str = "********************************";

const TOP_MENU: &[(&str, &str)] = &[
    ("api", "start the api server"),
    ("cli", "start the cli"),
    ("quit", "quit the program"),
];

const TODO_MENU: &[(&str, &str)] = &[
    ("pg", "select postgres database"),
    ("mg", "select mongodb database"),
    ("list", "list all todos"),
    ("create", "create a todo"),
    ("update", "update a todo"),
    ("delete", "delete a todo"),
    ("done", "mark a todo as done"),
    ("quit", "quit the program"),
];

/// What the caller should do once the top-level shell returns.
#[derive(Debug, PartialEq, Eq)]
pub enum Exit {
    /// Leave the program.
    Quit,
    /// Start the HTTP API server.
    Serve,
}

/// Whether the nested shell keeps reading commands.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    store: Arc<dyn DocumentStore>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            input,
            output,
            store,
        }
    }

    /// Run the top-level loop: `api`, `cli` or `quit`.
    pub async fn run(&mut self) -> Result<Exit> {
        self.print_menu(TOP_MENU)?;
        loop {
            let Some(cmd) = self.prompt("Enter command: ")? else {
                break;
            };
            match cmd.as_str() {
                "api" => return Ok(Exit::Serve),
                "cli" => {
                    self.run_todo_shell().await?;
                    break;
                }
                "quit" => break,
                _ => self.say("Unknown command")?,
            }
        }
        self.say("Bye!")?;
        Ok(Exit::Quit)
    }

    /// Run the nested todo shell until `quit` or end of input.
    async fn run_todo_shell(&mut self) -> Result<()> {
        self.say(RULE)?;
        self.say("Welcome to Todo CLI")?;
        self.print_menu(TODO_MENU)?;

        let mut selected: Option<Arc<dyn DocumentStore>> = None;
        loop {
            let Some(cmd) = self.prompt("Enter command: ")? else {
                return Ok(());
            };

            let flow = match cmd.as_str() {
                "quit" => Flow::Quit,
                "pg" => {
                    self.say("PostgreSQL backend is not available")?;
                    Flow::Continue
                }
                "mg" => {
                    selected = Some(self.store.clone());
                    tracing::debug!(backend = self.store.backend(), "Document store selected");
                    self.say(&format!("Using {} document store", self.store.backend()))?;
                    Flow::Continue
                }
                "list" | "create" | "update" | "delete" | "done" => match selected.clone() {
                    None => {
                        self.say("Please select a database first")?;
                        Flow::Continue
                    }
                    Some(store) => self.dispatch(&cmd, store.as_ref()).await?,
                },
                _ => {
                    self.say("Unknown command")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    async fn dispatch(&mut self, cmd: &str, store: &dyn DocumentStore) -> Result<Flow> {
        match cmd {
            "list" => self.list(store).await,
            "create" => self.create(store).await,
            "update" => self.update(store).await,
            "delete" => self.delete(store).await,
            "done" => self.done(store).await,
            _ => Ok(Flow::Continue),
        }
    }

    async fn list(&mut self, store: &dyn DocumentStore) -> Result<Flow> {
        let todos = store.list_todos().await.context("failed to list todos")?;
        if todos.is_empty() {
            self.say("No todos found")?;
            return Ok(Flow::Continue);
        }
        for todo in todos {
            self.say(&format!(
                "{}\t{}\t{}\t{}({})",
                todo.id, todo.title, todo.completed, todo.owner.name, todo.owner.id
            ))?;
        }
        Ok(Flow::Continue)
    }

    async fn create(&mut self, store: &dyn DocumentStore) -> Result<Flow> {
        let Some(title) = self.prompt("Enter todo title: ")? else {
            return Ok(Flow::Quit);
        };

        let owners = store.list_owners().await.context("failed to list owners")?;
        self.say("List of owners:")?;
        for owner in &owners {
            self.say(&format!("{}\t{}", owner.id, owner.name))?;
        }

        let Some(owner_id) = self.prompt("Enter todo owner id: ")? else {
            return Ok(Flow::Quit);
        };
        if !owners.iter().any(|o| o.id == owner_id) {
            let Some(name) = self.prompt("Enter todo owner name: ")? else {
                return Ok(Flow::Quit);
            };
            store
                .create_owner(&Owner::new(owner_id.clone(), name))
                .await
                .context("failed to create owner")?;
        }

        let todo = store
            .create_todo(&NewTodo::new(title, owner_id))
            .await
            .context("failed to create todo")?;
        self.say(&format!("Todo created: {}", todo.id))?;
        Ok(Flow::Continue)
    }

    async fn update(&mut self, store: &dyn DocumentStore) -> Result<Flow> {
        let Some(id) = self.prompt("Enter todo id: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(title) = self.prompt("Enter todo title: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(completed) = self.prompt("Enter todo completed: ")? else {
            return Ok(Flow::Quit);
        };

        let patch = TodoPatch {
            title,
            completed: completed == "true",
        };
        store
            .update_todo(&id, &patch)
            .await
            .context("failed to update todo")?;
        self.say("Todo updated")?;
        Ok(Flow::Continue)
    }

    async fn delete(&mut self, store: &dyn DocumentStore) -> Result<Flow> {
        let Some(id) = self.prompt("Enter todo id: ")? else {
            return Ok(Flow::Quit);
        };
        store.delete_todo(&id).await.context("failed to delete todo")?;
        self.say("Todo deleted")?;
        Ok(Flow::Continue)
    }

    async fn done(&mut self, store: &dyn DocumentStore) -> Result<Flow> {
        let Some(id) = self.prompt("Enter todo id: ")? else {
            return Ok(Flow::Quit);
        };
        store.mark_done(&id).await.context("failed to mark todo done")?;
        self.say("Todo marked as done")?;
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self, menu: &[(&str, &str)]) -> Result<()> {
        self.say(RULE)?;
        self.say("Commands:")?;
        for (cmd, help) in menu {
            self.say(&format!("{cmd} - {help}"))?;
        }
        self.say(RULE)
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").context("failed to write output")
    }

    /// Print `label` and read one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}").context("failed to write output")?;
        self.output.flush().context("failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
