/// Levenshtein edit distance over case-folded strings
///
/// Full DP table, O(|a|·|b|) time and space. Species names are short, so the
/// quadratic table is never a concern at catalog scale.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        dp[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            if a[i - 1] == b[j - 1] {
                dp[i][j] = dp[i - 1][j - 1];
            } else {
                dp[i][j] = 1 + dp[i - 1][j]
                    .min(dp[i][j - 1])
                    .min(dp[i - 1][j - 1]);
            }
        }
    }

    dp[a.len()][b.len()]
}
