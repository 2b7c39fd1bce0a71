//! Fixed instructional templates for each analysis kind
//!
//! These are static text blocks; swapping their wording does not change any
//! orchestration logic. Each template is followed by a `Documents:` header
//! and the assembled document text when a prompt is built.

/// Comprehensive document summary
pub const SUMMARY: &str = r#"Analyze the following legal document(s) and provide a comprehensive summary including:
1. Document type and purpose
2. Key parties involved
3. Main terms and conditions
4. Important dates and deadlines
5. Financial terms
6. Obligations of each party"#;

/// Risk and red-flag review
pub const RED_FLAGS: &str = r#"Identify potential legal risks, problematic clauses, and red flags in the following documents. Focus on:
1. Unusual or unfair terms
2. Potential compliance issues
3. Missing important clauses
4. Ambiguous language
5. Terms that heavily favor one party
6. Potential legal risks"#;

/// Key terms and provisions extraction
pub const KEY_TERMS: &str = r#"Extract and explain the most important terms, clauses, and provisions from the following documents:
1. Payment terms and amounts
2. Deadlines and dates
3. Termination conditions
4. Liability and indemnification
5. Intellectual property rights
6. Confidentiality provisions
7. Dispute resolution mechanisms"#;

/// Actionable recommendations
pub const RECOMMENDATIONS: &str = r#"Provide specific recommendations and advice for the following legal documents:
1. Suggested modifications or additions
2. Negotiation points
3. Legal review priorities
4. Compliance requirements
5. Best practices
6. Next steps"#;

/// Plain-English translation of the whole document set
pub const PLAIN_SUMMARY: &str = r#"You are a legal translator who helps people understand complex legal documents. Analyze the following legal document(s) and provide a comprehensive summary in plain English that anyone can understand.

For each important section, provide:
1. **What it means in simple terms** - Explain complex legal concepts using everyday language
2. **Key legal terms translated** - Take difficult legal jargon and explain what it actually means
3. **Why it matters to you** - Explain the practical implications for the reader
4. **Important numbers and dates** - Highlight any money amounts, deadlines, or time periods
5. **Your rights and obligations** - What you can do, what you must do, and what others must do

Make sure to:
- Use simple, conversational language
- Avoid legal jargon unless you immediately explain it
- Use analogies and examples when helpful
- Highlight anything that could cost money or create obligations
- Point out any deadlines or time-sensitive items
- Explain the consequences of different actions

Format your response with clear sections and use bullet points where helpful."#;

/// Legal-terms glossary
pub const GLOSSARY: &str = r#"Extract all complex legal terms from the following documents and provide simple, clear definitions that a regular person can understand. Format as a glossary with each term followed by its plain English explanation.

Focus on terms like: liability, indemnification, jurisdiction, breach, remedies, warranties, representations, covenants, etc."#;

/// Closing instruction appended to chat-answer prompts
pub const CHAT_GUIDANCE: &str = "Please provide a helpful, accurate response based on the document content. If the question cannot be answered from the document content, politely explain what information is available.";
