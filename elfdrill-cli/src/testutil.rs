use elfdrill_core::{Binary, ElfClass, Section, Segment, FILE_TYPES, SECTION_TYPES, SEGMENT_TYPES};
use std::path::PathBuf;

/// 64-bit executable with 9 sections, 3 segments, and entry point 0x401020.
pub fn sample_binary() -> Binary {
    Binary {
        path: PathBuf::from("training-folder/sample"),
        class: ElfClass::Elf64,
        file_type: FILE_TYPES.value_at(2).expect("ET_EXEC entry") as u16,
        entry: 0x401020,
        sections: (0..9)
            .map(|i| Section {
                name: format!(".sec{i}"),
                sh_type: SECTION_TYPES.value_at(1).expect("SHT_PROGBITS entry"),
            })
            .collect(),
        // PT_PHDR, PT_LOAD, PT_DYNAMIC by table position
        segments: [6usize, 1, 2]
            .iter()
            .map(|&i| Segment {
                p_type: SEGMENT_TYPES.value_at(i).expect("listed segment type"),
            })
            .collect(),
    }
}
