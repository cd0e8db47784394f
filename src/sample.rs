//! Illustrative five-word CET-4 input, in the nested word-book export shape

use crate::error::{ConvertError, Result};
use serde_json::{json, Value};
use std::io::Write;

/// Default file name for the generated sample
pub const SAMPLE_FILE: &str = "CET4_sample_full.json";

fn entry(rank: u32, head: &str, word_id: &str, content: Value) -> Value {
    json!({
        "wordRank": rank,
        "headWord": head,
        "content": {
            "word": {
                "wordHead": head,
                "wordId": word_id,
                "content": content
            }
        }
    })
}

/// The five sample records: access, project, intention, negotiate, alternative
pub fn sample_records() -> Vec<Value> {
    vec![
        entry(1, "access", "CET4luan_1_1", json!({
            "sentence": {
                "sentences": [
                    {"sContent": "Users can access their voice mail remotely.", "sCn": "用户可以远程获取语音邮件。"},
                    {"sContent": "Access to the papers is restricted to senior management.", "sCn": "只有高级管理层才有权查阅这些文件。"}
                ]
            },
            "usphone": "'æksɛs",
            "ukphone": "'ækses",
            "trans": [
                {"tranCn": "获取", "pos": "v"},
                {"tranCn": "接近，入口", "pos": "n"}
            ]
        })),
        entry(2, "project", "CET4luan_1_2", json!({
            "sentence": {
                "sentences": [
                    {"sContent": "The project aims to provide an analysis of children's emotions.", "sCn": "该计划旨在对儿童情绪作出分析。"},
                    {"sContent": "a three-year research project", "sCn": "一项为期三年的研究计划"}
                ]
            },
            "usphone": "prəˈdʒɛkt",
            "ukphone": "prəˈdʒekt",
            "trans": [
                {"tranCn": "工程；课题、作业", "pos": "n"}
            ]
        })),
        entry(3, "intention", "CET4luan_1_3", json!({
            "sentence": {
                "sentences": [
                    {"sContent": "They went into town with the intention of visiting the library.", "sCn": "他们进了城，打算参观图书馆。"}
                ]
            },
            "usphone": "ɪn'tɛnʃən",
            "ukphone": "ɪnˈtenʃn",
            "trans": [
                {"tranCn": "打算，意图", "pos": "n"}
            ]
        })),
        entry(4, "negotiate", "CET4luan_1_5", json!({
            "sentence": {
                "sentences": [
                    {"sContent": "His first aim is to get the warring parties back to the negotiating table.", "sCn": "他的首要目标就是把交战各方拉回到谈判桌上。"}
                ]
            },
            "usphone": "nɪ'ɡoʃɪet",
            "ukphone": "nɪ'ɡəʊʃɪeɪt",
            "trans": [
                {"tranCn": "谈判，协商，交涉", "pos": "v"}
            ]
        })),
        entry(5, "alternative", "CET4luan_1_7", json!({
            "sentence": {
                "sentences": [
                    {"sContent": "New ways to treat arthritis may provide an alternative to painkillers.", "sCn": "治疗关节炎的新方法可能会提供一种止痛药的替代品。"}
                ]
            },
            "usphone": "ɔl'tɝnətɪv",
            "ukphone": "ɔ:lˈtɜ:nətɪv",
            "trans": [
                {"tranCn": "代替品", "pos": "n"}
            ]
        })),
    ]
}

/// Write the sample records one JSON object per line, returning the count
pub fn write_sample<W: Write>(mut writer: W) -> Result<usize> {
    let records = sample_records();
    for record in &records {
        let line = serde_json::to_string(record)?;
        writeln!(writer, "{}", line).map_err(ConvertError::Write)?;
    }
    writer.flush().map_err(ConvertError::Write)?;
    Ok(records.len())
}
