//! Hand-assembled ELF images for parser and locator tests.

/// A complete 64-bit little-endian ET_EXEC image: one PT_LOAD segment and
/// two sections (the null section and `.shstrtab`), 264 bytes total.
pub fn minimal_elf64(entry: u64) -> Vec<u8> {
    const SHSTRTAB_OFFSET: u64 = 120;
    const SHOFF: u64 = 136;

    let mut buf = Vec::with_capacity(264);
    // e_ident: magic, ELFCLASS64, little-endian, version 1
    buf.extend_from_slice(&[0x7f, b'E', b'L', b'F', 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    buf.extend_from_slice(&2u16.to_le_bytes()); // e_type = ET_EXEC
    buf.extend_from_slice(&62u16.to_le_bytes()); // e_machine = EM_X86_64
    buf.extend_from_slice(&1u32.to_le_bytes()); // e_version
    buf.extend_from_slice(&entry.to_le_bytes()); // e_entry
    buf.extend_from_slice(&64u64.to_le_bytes()); // e_phoff
    buf.extend_from_slice(&SHOFF.to_le_bytes()); // e_shoff
    buf.extend_from_slice(&0u32.to_le_bytes()); // e_flags
    buf.extend_from_slice(&64u16.to_le_bytes()); // e_ehsize
    buf.extend_from_slice(&56u16.to_le_bytes()); // e_phentsize
    buf.extend_from_slice(&1u16.to_le_bytes()); // e_phnum
    buf.extend_from_slice(&64u16.to_le_bytes()); // e_shentsize
    buf.extend_from_slice(&2u16.to_le_bytes()); // e_shnum
    buf.extend_from_slice(&1u16.to_le_bytes()); // e_shstrndx

    // program header: PT_LOAD r-x covering the whole file
    buf.extend_from_slice(&1u32.to_le_bytes()); // p_type
    buf.extend_from_slice(&5u32.to_le_bytes()); // p_flags
    buf.extend_from_slice(&0u64.to_le_bytes()); // p_offset
    buf.extend_from_slice(&0x400000u64.to_le_bytes()); // p_vaddr
    buf.extend_from_slice(&0x400000u64.to_le_bytes()); // p_paddr
    buf.extend_from_slice(&264u64.to_le_bytes()); // p_filesz
    buf.extend_from_slice(&264u64.to_le_bytes()); // p_memsz
    buf.extend_from_slice(&0x1000u64.to_le_bytes()); // p_align

    // .shstrtab contents
    debug_assert_eq!(buf.len() as u64, SHSTRTAB_OFFSET);
    buf.extend_from_slice(b"\0.shstrtab\0");
    buf.resize(SHOFF as usize, 0);

    // section header 0: SHT_NULL
    buf.extend_from_slice(&[0u8; 64]);
    // section header 1: .shstrtab
    buf.extend_from_slice(&1u32.to_le_bytes()); // sh_name
    buf.extend_from_slice(&3u32.to_le_bytes()); // sh_type = SHT_STRTAB
    buf.extend_from_slice(&0u64.to_le_bytes()); // sh_flags
    buf.extend_from_slice(&0u64.to_le_bytes()); // sh_addr
    buf.extend_from_slice(&SHSTRTAB_OFFSET.to_le_bytes()); // sh_offset
    buf.extend_from_slice(&11u64.to_le_bytes()); // sh_size
    buf.extend_from_slice(&0u32.to_le_bytes()); // sh_link
    buf.extend_from_slice(&0u32.to_le_bytes()); // sh_info
    buf.extend_from_slice(&1u64.to_le_bytes()); // sh_addralign
    buf.extend_from_slice(&0u64.to_le_bytes()); // sh_entsize

    debug_assert_eq!(buf.len(), 264);
    buf
}
