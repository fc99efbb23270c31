use crate::bank::QuestionBank;
use crate::output;
use crate::question::Question;
use anyhow::{Context, Result};
use elfdrill_core::locator;
use elfdrill_core::Binary;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

const SEARCH_DIRS: [&str; 2] = ["/bin", "/usr/bin"];

/// Running score. Owned by the game and never reset, so it carries across
/// every round of one invocation.
#[derive(Debug, Default, Clone, Copy)]
pub struct Scoreboard {
    pub score: u64,
    pub asked: u64,
}

pub struct Game {
    folder: PathBuf,
    bank: QuestionBank,
    scoreboard: Scoreboard,
    candidates: Vec<PathBuf>,
    rng: StdRng,
    folder_ready: bool,
}

impl Game {
    pub fn new(folder: PathBuf, bank: QuestionBank) -> Self {
        Game {
            folder,
            bank,
            scoreboard: Scoreboard::default(),
            candidates: Vec::new(),
            rng: StdRng::from_entropy(),
            folder_ready: false,
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// One round: fresh binary, one random question, score report.
    pub fn play_round(&mut self, input: &mut dyn BufRead) -> Result<()> {
        self.ensure_folder(input)?;
        let binary = self.load_binary()?;
        output::info(&format!("Training binary file is: {}", binary.path.display()));

        let question = self
            .bank
            .questions
            .choose(&mut self.rng)
            .context("question bank is empty")?;
        ask_question(question, &binary, &mut self.scoreboard, &mut self.rng, input)?;
        output::info(&format!(
            "Your score: {}/{}",
            self.scoreboard.score, self.scoreboard.asked
        ));
        Ok(())
    }

    fn ensure_folder(&mut self, input: &mut dyn BufRead) -> Result<()> {
        if self.folder_ready {
            return Ok(());
        }
        if self.folder.exists() {
            output::alert(
                "The folder path exists (you can use -f option to specify a manual training folder name)",
            );
            if !output::confirm("Do you want to use existing folder?", false, input)? {
                std::process::exit(0);
            }
        } else {
            fs::create_dir_all(&self.folder)
                .with_context(|| format!("creating folder {}", self.folder.display()))?;
            log::debug!("Folder {} created", self.folder.display());
        }
        self.folder_ready = true;
        Ok(())
    }

    fn load_binary(&mut self) -> Result<Binary> {
        if self.candidates.is_empty() {
            let mut found = Vec::new();
            for dir in SEARCH_DIRS {
                found.extend(locator::find_executables(Path::new(dir)));
            }
            self.candidates = locator::filter_elf(&found);
            log::debug!(
                "{} executable candidates, {} recognized as ELF",
                found.len(),
                self.candidates.len()
            );
        }
        locator::pick_random_elf(&mut self.rng, &mut self.candidates, &self.folder)
    }
}

/// Asks one question and settles the scoreboard: `asked` always moves,
/// `score` only on a correct answer.
pub fn ask_question(
    question: &Question,
    binary: &Binary,
    scoreboard: &mut Scoreboard,
    rng: &mut StdRng,
    input: &mut dyn BufRead,
) -> Result<()> {
    scoreboard.asked += 1;
    if question.ask(binary, rng, input)? {
        scoreboard.score += 1;
    }
    Ok(())
}
