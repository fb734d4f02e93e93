//! Interactive read-eval loop over the numbered command menu.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use itertools::Itertools;
use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};

use fpick_core::ErrorSink;
use fpick_nav::{Navigator, PathListing, Selector};
use fpick_ops::{BatchKind, BatchProcessor, FileSystemOps};

use crate::console::write_listing;

/// Commands offered by the menu, numbered by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, FromRepr)]
pub enum MenuCommand {
    #[strum(to_string = "Display Directory")]
    DisplayDirectory,
    Navigate,
    #[strum(to_string = "Go to Parent Directory")]
    GoToParent,
    #[strum(to_string = "Select Files")]
    SelectFiles,
    Copy,
    Move,
    Delete,
    Quit,
}

/// The interactive session.
///
/// Navigation and selection problems go to the batch processor's sink, so
/// every user-facing error shares one channel.
pub struct Menu<L, F, S, R, W> {
    navigator: Navigator<L>,
    selector: Selector,
    batch: BatchProcessor<F, S>,
    input: R,
    output: W,
    max_attempts: u32,
}

impl<L, F, S, R, W> Menu<L, F, S, R, W>
where
    L: PathListing,
    F: FileSystemOps,
    S: ErrorSink,
    R: BufRead,
    W: Write,
{
    pub fn new(
        navigator: Navigator<L>,
        batch: BatchProcessor<F, S>,
        input: R,
        output: W,
        max_attempts: u32,
    ) -> Self {
        Self {
            navigator,
            selector: Selector::new(),
            batch,
            input,
            output,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Run until Quit, end of input, or too many invalid choices.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.display_directory()?;
            self.display_commands()?;

            let Some(command) = self.ask("Choice: ", |s| {
                s.parse::<usize>().ok().and_then(MenuCommand::from_repr)
            })?
            else {
                writeln!(self.output, "Goodbye!")?;
                return Ok(());
            };

            if !self.update(command)? {
                return Ok(());
            }
        }
    }

    /// Execute one command; returns `false` when the session should end.
    fn update(&mut self, command: MenuCommand) -> io::Result<bool> {
        tracing::debug!(%command, "menu command");

        match command {
            MenuCommand::DisplayDirectory => self.display_directory()?,
            MenuCommand::Navigate => {
                if let Some(index) = self.ask("Enter navigation index: ", |s| s.parse().ok())? {
                    self.navigator.navigate(index, self.batch.sink_mut());
                }
            }
            MenuCommand::GoToParent => {
                if !self.navigator.go_to_parent(self.batch.sink_mut()) {
                    writeln!(self.output, "Already at the root directory.")?;
                }
            }
            MenuCommand::SelectFiles => self.select_files()?,
            MenuCommand::Copy => self.run_with_destination(BatchKind::Copy, "copying")?,
            MenuCommand::Move => self.run_with_destination(BatchKind::Move, "moving")?,
            MenuCommand::Delete => {
                let report =
                    self.batch
                        .run_batch(self.selector.selection_mut(), BatchKind::Delete, None);
                writeln!(self.output, "{}", report.summary())?;
            }
            MenuCommand::Quit => {
                writeln!(self.output, "Goodbye!")?;
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn select_files(&mut self) -> io::Result<()> {
        self.display_directory()?;
        let Some(spec) = self.read_line("Enter file indices to select (comma-separated): ")?
        else {
            return Ok(());
        };

        let selected = self.selector.select_by_indices(
            &spec,
            self.navigator.listing(),
            self.batch.sink_mut(),
        );

        if selected.is_empty() {
            writeln!(self.output, "No files selected.")?;
        } else {
            let names = selected
                .iter()
                .map(|p| p.file_name().unwrap_or_default().to_string_lossy())
                .join(", ");
            writeln!(self.output, "Selected {} file(s): {names}", selected.len())?;
        }
        Ok(())
    }

    fn run_with_destination(&mut self, kind: BatchKind, verb: &str) -> io::Result<()> {
        let prompt = format!("Enter destination path for {verb}: ");
        let Some(raw) = self.read_line(&prompt)? else {
            return Ok(());
        };
        let destination = Some(PathBuf::from(raw)).filter(|p| !p.as_os_str().is_empty());

        let report = self
            .batch
            .run_batch(self.selector.selection_mut(), kind, destination.as_deref());
        writeln!(self.output, "{}", report.summary())
    }

    fn display_directory(&mut self) -> io::Result<()> {
        let listing = self.navigator.list_contents(self.batch.sink_mut());
        write_listing(&mut self.output, listing)
    }

    fn display_commands(&mut self) -> io::Result<()> {
        let commands = MenuCommand::iter()
            .enumerate()
            .map(|(i, command)| format!("{i}. {command}"))
            .join("\n");
        writeln!(self.output, "\n--- File Explorer ---\n{commands}\n")
    }

    /// Prompt until `parse` accepts the input, at most `max_attempts` times.
    ///
    /// Returns `None` on end of input or when attempts run out.
    fn ask<T>(&mut self, prompt: &str, parse: impl Fn(&str) -> Option<T>) -> io::Result<Option<T>> {
        for _ in 0..self.max_attempts {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            if let Some(value) = parse(&line) {
                return Ok(Some(value));
            }
            writeln!(self.output, "Input not valid !")?;
        }

        writeln!(self.output, "Too many invalid inputs.")?;
        Ok(None)
    }

    /// Prompt for one trimmed line; `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fpick_nav::DirLister;
    use fpick_ops::LocalFileSystem;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::TempDir;

    type TestMenu = Menu<DirLister, LocalFileSystem, Vec<String>, Cursor<String>, Vec<u8>>;

    /// `dest/`, `src/` with `a.txt`, `b.txt`, `c.txt`.
    fn setup() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("dest")).unwrap();
        fs::create_dir(temp.path().join("src")).unwrap();
        for name in ["a.txt", "b.txt", "c.txt"] {
            fs::write(temp.path().join("src").join(name), name).unwrap();
        }
        temp
    }

    fn menu(start: &Path, script: &str) -> TestMenu {
        Menu::new(
            Navigator::new(DirLister::new().with_sorting(true), start),
            BatchProcessor::new(LocalFileSystem::new(), Vec::new()),
            Cursor::new(script.to_string()),
            Vec::new(),
            3,
        )
    }

    fn output(menu: &TestMenu) -> String {
        String::from_utf8(menu.output.clone()).unwrap()
    }

    #[test]
    fn test_menu_lists_all_commands() {
        let names: Vec<String> = MenuCommand::iter().map(|c| c.to_string()).collect();
        assert_eq!(names.len(), 8);
        assert_eq!(names[2], "Go to Parent Directory");
        assert_eq!(MenuCommand::from_repr(7), Some(MenuCommand::Quit));
        assert_eq!(MenuCommand::from_repr(8), None);
    }

    #[test]
    fn test_navigate_select_copy() {
        let temp = setup();
        let dest = temp.path().join("dest");
        let script = format!("1\n1\n3\n0,2\n4\n{}\n7\n", dest.display());
        let mut menu = menu(temp.path(), &script);

        menu.run().unwrap();

        assert!(dest.join("a.txt").exists());
        assert!(!dest.join("b.txt").exists());
        assert!(dest.join("c.txt").exists());
        let out = output(&menu);
        assert!(out.contains("Selected 2 file(s): a.txt, c.txt"));
        assert!(out.contains("Copied 2 item(s)"));
        assert!(out.ends_with("Goodbye!\n"));
        assert!(menu.batch.sink().is_empty());
    }

    #[test]
    fn test_copy_without_destination_reports_each_item() {
        let temp = setup();
        let script = "3\n0,1\n4\n\n7\n";
        let mut menu = menu(&temp.path().join("src"), script);

        menu.run().unwrap();

        assert!(output(&menu).contains("Copied 0 item(s), 2 failed"));
        assert_eq!(
            menu.batch.sink(),
            &vec!["Destination path is not provided".to_string(); 2]
        );
        assert!(menu.selector.selection().is_empty());
    }

    #[test]
    fn test_delete_selected() {
        let temp = setup();
        let src = temp.path().join("src");
        let mut menu = menu(&src, "3\n1\n6\n7\n");

        menu.run().unwrap();

        assert!(!src.join("b.txt").exists());
        assert!(src.join("a.txt").exists());
        assert!(output(&menu).contains("Deleted 1 item(s)"));
    }

    #[test]
    fn test_invalid_choices_are_bounded() {
        let temp = setup();
        let mut menu = menu(temp.path(), "x\n42\n-1\n");

        menu.run().unwrap();

        let out = output(&menu);
        assert_eq!(out.matches("Input not valid !").count(), 3);
        assert!(out.contains("Too many invalid inputs."));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let temp = setup();
        let mut menu = menu(temp.path(), "");

        menu.run().unwrap();
        assert!(output(&menu).ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_bad_index_spec_is_reported() {
        let temp = setup();
        let mut menu = menu(&temp.path().join("src"), "3\na,2\n7\n");

        menu.run().unwrap();

        assert_eq!(menu.batch.sink().len(), 1);
        assert!(menu.batch.sink()[0].starts_with("Invalid input"));
        assert!(output(&menu).contains("No files selected."));
    }

    #[test]
    fn test_navigate_into_file_and_parent() {
        let temp = setup();
        let src = temp.path().join("src");
        let mut menu = menu(&src, "1\n0\n2\n7\n");

        menu.run().unwrap();

        assert_eq!(menu.batch.sink(), &vec!["Cannot open file a.txt".to_string()]);
        assert_eq!(menu.navigator.current_path(), temp.path());
    }
}
