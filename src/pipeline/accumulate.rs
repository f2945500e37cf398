/// All comments for one student, joined in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentReport {
    pub text: String,
    pub comment_count: usize,
}

/// Concatenates without separators; templates carry their own spacing.
pub fn assemble<I, S>(comments: I) -> StudentReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = StudentReport::default();
    for comment in comments {
        report.text.push_str(comment.as_ref());
        report.comment_count += 1;
    }
    report
}
