//! 流程介绍页（静态内容）

use super::{heading, section};

const TECHNOLOGIES: [&str; 7] = [
    "LangChain",
    "SentenceTransformer",
    "ChromaDB",
    "OpenAI GPT",
    "FastAPI",
    "Rust",
    "Tokio",
];

const PIPELINE_STEPS: [(&str, &str); 6] = [
    (
        "Knowledge Base Input",
        "We start with the complete \"Cracking the Coding Interview\" book as our knowledge base, \
         containing comprehensive coding interview preparation material.",
    ),
    (
        "Document Splitting",
        "Using LangChain's RecursiveCharacterTextSplitter, we break down the book into \
         manageable chunks while preserving semantic meaning and context.",
    ),
    (
        "Text Embedding",
        "SentenceTransformer converts text chunks into high-dimensional vector representations, \
         capturing semantic similarities between different concepts.",
    ),
    (
        "Vector Storage",
        "ChromaDB stores the embedded vectors in an efficient vector database, \
         enabling fast similarity searches and retrieval operations.",
    ),
    (
        "Context Retrieval & LLM Integration",
        "When you ask a question, we retrieve relevant context from the vector store \
         and combine it with OpenAI's LLM to generate accurate, contextual answers.",
    ),
    (
        "API & Frontend",
        "FastAPI serves the backend endpoints, while this client provides \
         an intuitive interface for your interview preparation needs.",
    ),
];

const BENEFITS: [(&str, &str); 3] = [
    (
        "Accurate Retrieval",
        "Vector similarity ensures the most relevant information is retrieved for your specific question.",
    ),
    (
        "Contextual Answers",
        "Combines retrieved context with LLM capabilities for comprehensive, accurate responses.",
    ),
    (
        "Scalable Architecture",
        "Built with modern tools that can easily scale to handle multiple users and larger datasets.",
    ),
];

pub fn render() -> String {
    let mut out = heading("RAG Pipeline Architecture");
    out.push_str(
        "Discover how our Retrieval-Augmented Generation system transforms \
         \"Cracking the Coding Interview\" into an intelligent assistant for your interview preparation.\n",
    );

    out.push_str(&section("Technologies Used"));
    out.push_str(&TECHNOLOGIES.join(" · "));
    out.push('\n');

    out.push_str(&section("Pipeline Flow"));
    for (i, (title, body)) in PIPELINE_STEPS.iter().enumerate() {
        out.push_str(&format!("{}. {}\n   {}\n", i + 1, title, body));
    }

    for (title, body) in BENEFITS {
        out.push_str(&section(title));
        out.push_str(body);
        out.push('\n');
    }
    out
}
