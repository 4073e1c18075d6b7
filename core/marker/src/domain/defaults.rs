//! 初回インストール時に書き込むサンプル
//!
//! 既存の marks.txt がある場合は使わない（上書きしない）。

use super::record::Record;

/// サンプルのブックマーク（順序も含めて固定）
pub fn default_records() -> Vec<Record> {
    vec![
        Record::new("tar cvzf %%.tar.gz %%", "tar "),
        Record::new("tar xvzf %%.tar.gz %%", "untar "),
        Record::new(r#"grep -irn "%%" *"#, "grep recursive"),
        Record::new(
            r#"awk "!(\$0 in array) { array[\$0]; print }" %%"#,
            "remove duplicates",
        ),
        Record::new(r#"du -ch  | grep -E "total\$""#, "directory size"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::serialize_store;

    #[test]
    fn test_defaults_serialize_to_sample_file() {
        let expected = concat!(
            "tar cvzf %%.tar.gz %%##tar \n",
            "tar xvzf %%.tar.gz %%##untar \n",
            "grep -irn \"%%\" *##grep recursive\n",
            "awk \"!(\\$0 in array) { array[\\$0]; print }\" %%##remove duplicates\n",
            "du -ch  | grep -E \"total\\$\"##directory size",
        );
        assert_eq!(serialize_store(&default_records()), expected);
    }
}
