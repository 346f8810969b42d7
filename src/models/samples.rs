/// 预置的示例问题
///
/// 选中后只填入输入框，不会自动提交
pub const SAMPLE_QUESTIONS: [&str; 5] = [
    "What is time complexity?",
    "How does binary search work?",
    "Explain dynamic programming",
    "How to reverse a linked list?",
    "What are the best sorting algorithms?",
];
