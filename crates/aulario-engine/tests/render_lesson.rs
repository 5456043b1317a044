//! End-to-end rendering of a realistic lesson.

use aulario_engine::models::block::ContentBlock;
use aulario_engine::render::{
    render_lesson, InlineSegment, Palette, RenderedBlock, TokenKind,
};
use aulario_engine::render::sections::sectionize;
use pretty_assertions::assert_eq;

fn heading(text: &str) -> ContentBlock {
    ContentBlock::Heading {
        text: text.to_string(),
    }
}

fn para(text: &str) -> ContentBlock {
    ContentBlock::Paragraph {
        text: text.to_string(),
    }
}

fn sample_lesson() -> Vec<ContentBlock> {
    vec![
        para("Bienvenido al curso."),
        heading("Tema 4: Gráficos con tortuga"),
        para("Usa `import turtle` para empezar."),
        heading("4.2 Colores"),
        ContentBlock::Table {
            headers: vec!["Color".to_string(), "Nombre en inglés".to_string()],
            rows: vec![
                vec!["negro".to_string(), "black".to_string()],
                vec!["rojo oscuro".to_string(), "dark red".to_string()],
                vec!["fucsia".to_string(), "fuchsia".to_string()],
            ],
        },
        ContentBlock::Code {
            text: "import turtle\nt = turtle.Turtle()\nt.forward(100)  # avanza".to_string(),
        },
        heading("Ejercicio 1 · Dibuja un cuadrado"),
        ContentBlock::List {
            items: vec![
                "Crea una tortuga con `turtle.Turtle()`".to_string(),
                "Repite cuatro veces: avanzar y girar 90 grados".to_string(),
            ],
            ordered: true,
        },
        ContentBlock::Callout {
            title: Some("Pista".to_string()),
            text: "Un bucle `for` ahorra repetir código.".to_string(),
        },
        ContentBlock::Unknown,
        ContentBlock::Image {
            src: "cuadrado.png".to_string(),
            alt: "Un cuadrado dibujado con la tortuga".to_string(),
            caption: None,
        },
    ]
}

#[test]
fn sections_follow_heading_classification() {
    let doc = render_lesson(&sample_lesson());

    let titles: Vec<&str> = doc.sections.iter().map(|s| s.title.as_str()).collect();
    // Leading paragraph lands in an anonymous section; the "4.2" and
    // "Ejercicio 1" headings stay inside "Tema 4".
    assert_eq!(titles, vec!["", "Tema 4: Gráficos con tortuga"]);
}

#[test]
fn rendered_document_structure() {
    let doc = render_lesson(&sample_lesson());
    let blocks = &doc.sections[1].blocks;

    // Unknown block dropped: prose, subheading, table, code, subheading,
    // list, callout, image.
    assert_eq!(blocks.len(), 8);

    let RenderedBlock::Prose { segments } = &blocks[0] else {
        panic!("expected Prose, got {:?}", blocks[0]);
    };
    assert_eq!(
        segments,
        &vec![
            InlineSegment::Text("Usa ".to_string()),
            InlineSegment::Code("import turtle".to_string()),
            InlineSegment::Text(" para empezar.".to_string()),
        ]
    );

    assert_eq!(
        blocks[1],
        RenderedBlock::Subheading {
            text: "4.2 Colores".to_string()
        }
    );

    let RenderedBlock::Table { rows, .. } = &blocks[2] else {
        panic!("expected Table, got {:?}", blocks[2]);
    };
    assert_eq!(rows[0][0].color, Some(Palette::Black));
    assert_eq!(rows[1][0].color, Some(Palette::DarkRed));
    assert_eq!(rows[2][0].color, None);
    assert_eq!(rows[0][1].color, None);

    let RenderedBlock::Code { lines } = &blocks[3] else {
        panic!("expected Code, got {:?}", blocks[3]);
    };
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0][0].kind, TokenKind::Keyword); // import
    assert_eq!(lines[0][2].kind, TokenKind::Plain); // turtle
    assert_eq!(lines[2].last().unwrap().kind, TokenKind::Comment);

    let RenderedBlock::List { items, ordered } = &blocks[5] else {
        panic!("expected List, got {:?}", blocks[5]);
    };
    assert!(*ordered);
    assert_eq!(
        items[0][1],
        InlineSegment::Code("turtle.Turtle()".to_string())
    );

    let RenderedBlock::Callout { title, .. } = &blocks[6] else {
        panic!("expected Callout, got {:?}", blocks[6]);
    };
    assert_eq!(title.as_deref(), Some("Pista"));

    assert_eq!(
        blocks[7],
        RenderedBlock::Image {
            src: "cuadrado.png".to_string(),
            alt: "Un cuadrado dibujado con la tortuga".to_string(),
            caption: None,
        }
    );
}

#[test]
fn code_lines_round_trip_losslessly() {
    let code = "import turtle\nt = turtle.Turtle()\nt.forward(100)  # avanza";
    let doc = render_lesson(&[ContentBlock::Code {
        text: code.to_string(),
    }]);
    let RenderedBlock::Code { lines } = &doc.sections[0].blocks[0] else {
        panic!("expected Code");
    };

    let rebuilt: Vec<String> = lines
        .iter()
        .map(|line| line.iter().map(|t| t.text.as_str()).collect())
        .collect();
    assert_eq!(rebuilt.join("\n"), code);
}

#[test]
fn sectionizing_partitions_without_loss() {
    let input = sample_lesson();
    let sections = sectionize(&input);

    let mut rebuilt = Vec::new();
    for section in &sections {
        if !section.title.is_empty() {
            rebuilt.push(heading(&section.title));
        }
        rebuilt.extend(section.blocks.iter().cloned());
    }
    assert_eq!(rebuilt, input);
}

#[test]
fn rendered_document_is_serializable() {
    let doc = render_lesson(&sample_lesson());
    let json = serde_json::to_string(&doc).unwrap();
    assert!(json.contains("Subheading"));
}
