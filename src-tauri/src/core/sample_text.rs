//! Built-in preview text and importing replacements from disk.

use std::path::Path;

use super::error::{ViewerError, ViewerResult};

const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ
abcdefghijklmnopqrstuvwxyz
The quick brown fox jumps over a lazy dog.
Pack my box with five dozen liquor jugs.
How vexingly quick daft zebras jump!
Mr. Jock, TV quiz PhD, bags few lynx.
The five boxing wizards jump quickly.";

const CHINESE: &str = "中文示例文本：
这是一个用于测试字体显示效果的中文示例。
良好的字体设计应该同时支持中西文字符。
字体查看器可以帮助设计师选择合适的字体。
中文排版需要考虑字间距、行间距和阅读舒适度。
宋体、黑体、楷体和仿宋是常用的中文字体。
选择合适的字体可以提升文本的可读性。
随着技术的发展，越来越多的优质中文字体被开发出来。";

const NUMBERS: &str = "Numbers: 0 1 2 3 4 5 6 7 8 9 ¼ ½ ¾ ¹ ² ³";

const PUNCTUATION: &str = "Punctuation:
Latin: , . ; : ! ? \" ' ( ) [ ] { } < > / \\ | ~ ` @ # $ % ^ & * - _ + =
CJK：， 。 ； ： ！ ？ 「 」 《 》 【 】 、 · … —";

const SPECIAL: &str = "Special characters:
© ® ™ € £ ¥ ¢ § ¶ † ‡ • · … – —
ΑΒΓΔΕΖΗΘΙΚΛΜΝΞΟΠΡΣΤΥΦΧΨΩ αβγδεζηθικλμνξοπρστυφχψω
АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

/// Default preview text covering Latin, CJK, digits, punctuation and
/// Greek/Cyrillic, with sections separated by blank lines.
pub fn default_sample_text() -> String {
    [LATIN, CHINESE, NUMBERS, PUNCTUATION, SPECIAL].join("\n\n")
}

/// Reads a UTF-8 text file to use as preview text.
pub fn import_sample_text(path: &Path) -> ViewerResult<String> {
    let text = std::fs::read_to_string(path).map_err(|e| ViewerError::io(path, e))?;
    log::info!("Imported {} bytes of sample text from {:?}", text.len(), path);
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_text_sections() {
        let text = default_sample_text();
        assert!(text.starts_with("ABCDEFGHIJKLMNOPQRSTUVWXYZ"));
        assert_eq!(text.split("\n\n").count(), 5);
        assert!(text.contains("宋体"));
        assert!(text.contains("αβγ"));
    }

    #[test]
    fn test_import_reads_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sample.txt");
        std::fs::write(&path, "天地玄黄\nLorem ipsum").unwrap();
        assert_eq!(import_sample_text(&path).unwrap(), "天地玄黄\nLorem ipsum");
    }

    #[test]
    fn test_import_missing_file() {
        let dir = tempdir().unwrap();
        let result = import_sample_text(&dir.path().join("absent.txt"));
        assert!(matches!(result, Err(ViewerError::Io { .. })));
    }
}
