use anyhow::Result;

/// Split a source line into its mnemonic and operands. Commas count as
/// whitespace, so `add $t0, $t1,$t2` and `add $t0 $t1 $t2` tokenize
/// identically.
pub fn tokenize(line: &str) -> Result<(String, Vec<String>)> {
    let mut tokens = line
        .replace(',', " ")
        .split_whitespace()
        .map(str::to_owned)
        .collect::<Vec<_>>();

    if tokens.is_empty() {
        return Err(anyhow::Error::msg(format!("nothing to tokenize: {:?}", line)));
    }

    let mnemonic = tokens.remove(0);
    Ok((mnemonic, tokens))
}
