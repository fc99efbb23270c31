use crate::question::{Generator, Question};
use anyhow::Result;
use elfdrill_core::{Binary, ElfClass, TypeTable, FILE_TYPES, SECTION_TYPES, SEGMENT_TYPES};
use rand::rngs::StdRng;
use rand::Rng;

pub struct QuestionBank {
    pub questions: Vec<Question>,
}

/// Assembles the fixed question catalog. Any marker/generator mismatch in a
/// dynamic question surfaces here, before the first round.
pub fn build() -> Result<QuestionBank> {
    let mut questions = Vec::new();

    questions.push(Question::fixed("How many sections the file have?", |binary, answer| {
        parse_dec(answer) == Some(binary.section_count() as u64)
    }));

    questions.push(Question::fixed("How many segments the file have?", |binary, answer| {
        parse_dec(answer) == Some(binary.segment_count() as u64)
    }));

    questions.push(Question::fixed(
        "Which virtual address (in hex) OS starts executing after execution?",
        |binary, answer| parse_hex(answer) == Some(binary.entry_point()),
    ));

    questions.push(Question::fixed(
        "What is the architecture of file 32bit or 64bit? (32/64)",
        |binary, answer| {
            (parse_dec(answer) == Some(32) && binary.class == ElfClass::Elf32)
                || (parse_dec(answer) == Some(64) && binary.class == ElfClass::Elf64)
        },
    ));

    questions.push(Question::fixed(
        format!("What is the type of ELF file?{}", FILE_TYPES.choice_list()),
        |binary, answer| choice(&FILE_TYPES, answer) == Some(u32::from(binary.file_type)),
    ));

    questions.push(Question::dynamic(
        format!(
            "What is the type of %&%th segment?{}",
            SEGMENT_TYPES.choice_list()
        ),
        vec![Box::new(|binary: &Binary, rng: &mut StdRng| {
            rng.gen_range(0..binary.segment_count()) as u64
        }) as Generator],
        |binary, answer, params| {
            let segment = &binary.segments[params[0] as usize];
            choice(&SEGMENT_TYPES, answer) == Some(segment.p_type)
        },
    )?);

    questions.push(Question::dynamic(
        format!(
            "What is the type of %&%th section?{}",
            SECTION_TYPES.choice_list()
        ),
        vec![Box::new(|binary: &Binary, rng: &mut StdRng| {
            rng.gen_range(0..binary.section_count()) as u64
        }) as Generator],
        |binary, answer, params| {
            let section = &binary.sections[params[0] as usize];
            choice(&SECTION_TYPES, answer) == Some(section.sh_type)
        },
    )?);

    Ok(QuestionBank { questions })
}

fn parse_dec(answer: &str) -> Option<u64> {
    answer.trim().parse().ok()
}

fn parse_hex(answer: &str) -> Option<u64> {
    let digits = answer.trim();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);
    u64::from_str_radix(digits, 16).ok()
}

fn choice(table: &TypeTable, answer: &str) -> Option<u32> {
    parse_dec(answer).and_then(|index| table.value_at(index as usize))
}
