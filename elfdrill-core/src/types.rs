use goblin::elf::header::{ET_CORE, ET_DYN, ET_EXEC, ET_NONE, ET_REL};
use goblin::elf::program_header::{
    PT_DYNAMIC, PT_GNU_EH_FRAME, PT_GNU_RELRO, PT_GNU_STACK, PT_INTERP, PT_LOAD, PT_NOTE,
    PT_NULL, PT_PHDR, PT_SHLIB, PT_TLS,
};
use goblin::elf::section_header::{
    SHT_DYNAMIC, SHT_DYNSYM, SHT_FINI_ARRAY, SHT_GNU_HASH, SHT_GNU_VERDEF, SHT_GNU_VERNEED,
    SHT_GNU_VERSYM, SHT_GROUP, SHT_HASH, SHT_INIT_ARRAY, SHT_NOBITS, SHT_NOTE, SHT_NULL,
    SHT_PREINIT_ARRAY, SHT_PROGBITS, SHT_REL, SHT_RELA, SHT_SHLIB, SHT_STRTAB, SHT_SYMTAB,
    SHT_SYMTAB_SHNDX,
};

/// Ordered (name, value) listing for one enumerated ELF domain.
///
/// Choice answers are indices into this listing, so the order is part of the
/// game contract and must stay stable.
pub struct TypeTable {
    entries: &'static [(&'static str, u32)],
}

impl TypeTable {
    const fn new(entries: &'static [(&'static str, u32)]) -> Self {
        TypeTable { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn name_at(&self, index: usize) -> Option<&'static str> {
        self.entries.get(index).map(|(name, _)| *name)
    }

    pub fn value_at(&self, index: usize) -> Option<u32> {
        self.entries.get(index).map(|(_, value)| *value)
    }

    /// Numbered listing rendered into question texts, one `\n\t<i>. <NAME>`
    /// line per entry.
    pub fn choice_list(&self) -> String {
        let mut out = String::new();
        for (index, (name, _)) in self.entries.iter().enumerate() {
            out.push_str(&format!("\n\t{index}. {name}"));
        }
        out
    }
}

pub static SEGMENT_TYPES: TypeTable = TypeTable::new(&[
    ("PT_NULL", PT_NULL),
    ("PT_LOAD", PT_LOAD),
    ("PT_DYNAMIC", PT_DYNAMIC),
    ("PT_INTERP", PT_INTERP),
    ("PT_NOTE", PT_NOTE),
    ("PT_SHLIB", PT_SHLIB),
    ("PT_PHDR", PT_PHDR),
    ("PT_TLS", PT_TLS),
    ("PT_GNU_EH_FRAME", PT_GNU_EH_FRAME),
    ("PT_GNU_STACK", PT_GNU_STACK),
    ("PT_GNU_RELRO", PT_GNU_RELRO),
]);

pub static SECTION_TYPES: TypeTable = TypeTable::new(&[
    ("SHT_NULL", SHT_NULL),
    ("SHT_PROGBITS", SHT_PROGBITS),
    ("SHT_SYMTAB", SHT_SYMTAB),
    ("SHT_STRTAB", SHT_STRTAB),
    ("SHT_RELA", SHT_RELA),
    ("SHT_HASH", SHT_HASH),
    ("SHT_DYNAMIC", SHT_DYNAMIC),
    ("SHT_NOTE", SHT_NOTE),
    ("SHT_NOBITS", SHT_NOBITS),
    ("SHT_REL", SHT_REL),
    ("SHT_SHLIB", SHT_SHLIB),
    ("SHT_DYNSYM", SHT_DYNSYM),
    ("SHT_INIT_ARRAY", SHT_INIT_ARRAY),
    ("SHT_FINI_ARRAY", SHT_FINI_ARRAY),
    ("SHT_PREINIT_ARRAY", SHT_PREINIT_ARRAY),
    ("SHT_GROUP", SHT_GROUP),
    ("SHT_SYMTAB_SHNDX", SHT_SYMTAB_SHNDX),
    ("SHT_GNU_HASH", SHT_GNU_HASH),
    ("SHT_GNU_VERDEF", SHT_GNU_VERDEF),
    ("SHT_GNU_VERNEED", SHT_GNU_VERNEED),
    ("SHT_GNU_VERSYM", SHT_GNU_VERSYM),
]);

pub static FILE_TYPES: TypeTable = TypeTable::new(&[
    ("ET_NONE", ET_NONE as u32),
    ("ET_REL", ET_REL as u32),
    ("ET_EXEC", ET_EXEC as u32),
    ("ET_DYN", ET_DYN as u32),
    ("ET_CORE", ET_CORE as u32),
]);
