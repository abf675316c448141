use textrank_summary::{
    jaccard_similarity, Sentence, SentenceEncoder, SentencePreprocessor, SimilarityMatrix,
    StopwordFilter, SummaryPipeline, TextRankSummarizer, ValidationError, DEFAULT_PUNCTUATION,
};

fn prepare(text: &str, stopwords: &[&str]) -> Vec<Sentence> {
    let preprocessor = SentencePreprocessor::new(
        StopwordFilter::from_list(stopwords),
        DEFAULT_PUNCTUATION.iter().copied(),
    );
    let mut sentences = preprocessor.get_sentences(text);
    SentenceEncoder::new()
        .encode_sentences(&mut sentences)
        .unwrap();
    sentences
}

#[test]
fn test_duplicate_sentence_is_left_out_of_graph() {
    let sentences = prepare("Cat sat. Dog sat. Cat sat.", &[]);
    assert_eq!(sentences.len(), 3);
    assert_eq!(sentences[0].encoded(), sentences[2].encoded());

    let mut graph = SimilarityMatrix::new();
    graph.fill_from_sentences(&sentences).unwrap();

    assert!(graph.contains(&sentences[0]));
    assert!(graph.contains(&sentences[1]));
    assert!(!graph.contains(&sentences[2]));

    // "cat sat" vs "dog sat": one shared token out of three
    let sim = graph
        .get_similarity_score(&sentences[0], &sentences[1])
        .unwrap();
    assert!((sim - 1.0 / 3.0).abs() < 1e-10);
    assert_eq!(
        graph.get_similarity_score(&sentences[0], &sentences[2]),
        Err(ValidationError::UnknownVertex { position: 2 })
    );
}

#[test]
fn test_disjoint_sentences_have_no_neighbors() {
    let sentences = prepare("Cat sat. Dog ran.", &[]);
    let mut graph = SimilarityMatrix::new();
    graph.fill_from_sentences(&sentences).unwrap();

    assert_eq!(
        graph
            .get_similarity_score(&sentences[0], &sentences[1])
            .unwrap(),
        0.0
    );
    assert_eq!(graph.calculate_inout_score(&sentences[0]).unwrap(), 0);
    assert_eq!(graph.calculate_inout_score(&sentences[1]).unwrap(), 0);
}

#[test]
fn test_graph_properties_on_real_text() {
    let text = "The little girl lived in a flower. \
        A toad stole the little girl at night. \
        The toad wanted her to marry his son. \
        Fish helped the girl escape from the toad. \
        A swallow carried the girl to a warm country.";
    let sentences = prepare(text, &["the", "a", "in", "at", "her", "to", "his", "from"]);
    let mut graph = SimilarityMatrix::new();
    graph.fill_from_sentences(&sentences).unwrap();

    let vertices = graph.get_vertices();
    for &a in vertices {
        assert_eq!(graph.get_similarity_score(a, a).unwrap(), 1.0);
        for &b in vertices {
            assert_eq!(
                graph.get_similarity_score(a, b).unwrap(),
                graph.get_similarity_score(b, a).unwrap()
            );
            let expected = if std::ptr::eq(a, b) {
                1.0
            } else {
                jaccard_similarity(a.encoded(), b.encoded())
            };
            assert_eq!(graph.get_similarity_score(a, b).unwrap(), expected);
        }
    }

    let degree_sum: usize = vertices
        .iter()
        .map(|v| graph.calculate_inout_score(v).unwrap())
        .sum();
    assert_eq!(degree_sum % 2, 0);

    let mut summarizer = TextRankSummarizer::new(&graph);
    let result = summarizer.train();
    assert!(result.iterations <= 50);
    assert_eq!(result.scores.len(), vertices.len());
    assert!(result.scores.iter().all(|&s| s >= 0.0));

    let summary = summarizer.make_summary(3);
    let positions: Vec<usize> = summary
        .lines()
        .map(|line| {
            sentences
                .iter()
                .find(|s| s.text() == line)
                .unwrap()
                .position()
        })
        .collect();
    assert_eq!(positions.len(), 3);
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_top_sentences_edge_counts() {
    let sentences = prepare("Cat sat. Dog sat. Bird sat.", &[]);
    let mut graph = SimilarityMatrix::new();
    graph.fill_from_sentences(&sentences).unwrap();
    let mut summarizer = TextRankSummarizer::new(&graph);
    summarizer.train();

    assert!(summarizer.get_top_sentences(0).is_empty());
    assert_eq!(summarizer.get_top_sentences(10).len(), 3);
}

#[test]
fn test_empty_sentence_slice_is_rejected() {
    let mut graph = SimilarityMatrix::new();

    assert_eq!(
        graph.fill_from_sentences(&[]),
        Err(ValidationError::EmptySentences)
    );
}

#[test]
fn test_pipeline_on_russian_text() {
    let text = "Жила-была женщина, которой очень хотелось иметь ребёнка. \
        Женщина пошла к старой колдунье. \
        Старой колдунье было сто лет. \
        Из зерна вырос цветок.";
    let mut pipeline = SummaryPipeline::new(StopwordFilter::from_list(&["к", "из", "очень"]));

    // The second sentence bridges the first and the third
    let summary = pipeline.summarize(text, 1).unwrap();

    assert_eq!(summary, "Женщина пошла к старой колдунье.");
}
