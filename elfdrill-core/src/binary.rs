use anyhow::{bail, ensure, Context, Result};
use goblin::elf::Elf;
use goblin::Object;
use std::fs;
use std::path::{Path, PathBuf};

/// Which ELF class the binary was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElfClass {
    Elf32,
    Elf64,
}

#[derive(Debug, Clone)]
pub struct Section {
    pub name: String,
    pub sh_type: u32,
}

#[derive(Debug, Clone)]
pub struct Segment {
    pub p_type: u32,
}

/// The parsed view of one training binary.
///
/// Captures everything the questions ask about; immutable for the round it
/// was loaded for.
#[derive(Debug)]
pub struct Binary {
    pub path: PathBuf,
    pub class: ElfClass,
    pub file_type: u16,
    pub entry: u64,
    pub sections: Vec<Section>,
    pub segments: Vec<Segment>,
}

impl Binary {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let buf = fs::read(&path)
            .with_context(|| format!("reading {}", path.as_ref().display()))?;
        match Object::parse(&buf)? {
            Object::Elf(elf) => Self::from_elf(path.as_ref().to_path_buf(), &elf),
            _ => bail!("{} is not an ELF image", path.as_ref().display()),
        }
    }

    fn from_elf(path: PathBuf, elf: &Elf) -> Result<Self> {
        let sections: Vec<Section> = elf
            .section_headers
            .iter()
            .map(|sh| Section {
                name: elf.shdr_strtab.get_at(sh.sh_name).unwrap_or("").to_string(),
                sh_type: sh.sh_type,
            })
            .collect();
        let segments: Vec<Segment> = elf
            .program_headers
            .iter()
            .map(|ph| Segment { p_type: ph.p_type })
            .collect();

        // Both dynamic questions draw an index, so an empty table would leave
        // nothing to ask about.
        ensure!(!sections.is_empty(), "ELF has no section headers");
        ensure!(!segments.is_empty(), "ELF has no program headers");

        Ok(Binary {
            path,
            class: if elf.is_64 {
                ElfClass::Elf64
            } else {
                ElfClass::Elf32
            },
            file_type: elf.header.e_type,
            entry: elf.header.e_entry,
            sections,
            segments,
        })
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn entry_point(&self) -> u64 {
        self.entry
    }

    pub fn is_64(&self) -> bool {
        self.class == ElfClass::Elf64
    }
}
