use proc_macro::{Delimiter, Group, Ident, Literal, Punct, Spacing, Span, TokenStream, TokenTree};

/// Build the `main` function around the annotated solver.
///
/// The solver item is kept as-is inside of the generated function, which
/// shadows any outer item of the same name, so the solver itself can be
/// called `main`.
pub(crate) fn build(args: TokenStream, item_stream: TokenStream) -> TokenStream {
    if let Some(tt) = args.into_iter().next() {
        return error(tt.span(), "`entry` does not take any arguments", item_stream);
    }

    let Some(name) = fn_name(&item_stream) else {
        return error(
            Span::call_site(),
            "`entry` can only be used on functions",
            item_stream,
        );
    };

    let span = name.span();

    let mut body = item_stream;
    body.extend(path(span, &["lib", "cli", "main"]));
    body.extend([group(
        Delimiter::Parenthesis,
        TokenTree::Ident(name).into(),
        span,
    )]);

    let mut stream = TokenStream::new();
    stream.extend([
        TokenTree::Ident(Ident::new("fn", span)),
        TokenTree::Ident(Ident::new("main", span)),
        group(Delimiter::Parenthesis, TokenStream::new(), span),
        punct('-', Spacing::Joint, span),
        punct('>', Spacing::Alone, span),
    ]);
    stream.extend(path(span, &["std", "process", "ExitCode"]));
    stream.extend([group(Delimiter::Brace, body, span)]);
    stream
}

/// Find the name of the function being annotated.
fn fn_name(item_stream: &TokenStream) -> Option<Ident> {
    let mut it = item_stream.clone().into_iter();

    while let Some(tt) = it.next() {
        if matches!(&tt, TokenTree::Ident(ident) if ident.to_string() == "fn") {
            return match it.next()? {
                TokenTree::Ident(name) => Some(name),
                _ => None,
            };
        }
    }

    None
}

/// Emit a `compile_error!` next to the unmodified item.
fn error(span: Span, message: &str, item_stream: TokenStream) -> TokenStream {
    let mut message = Literal::string(message);
    message.set_span(span);

    let mut stream = item_stream;
    stream.extend(path(span, &["core", "compile_error"]));
    stream.extend([
        punct('!', Spacing::Alone, span),
        group(Delimiter::Parenthesis, TokenTree::Literal(message).into(), span),
        punct(';', Spacing::Alone, span),
    ]);
    stream
}

/// An absolute path like `::a::b::c`.
fn path(span: Span, segments: &[&str]) -> Vec<TokenTree> {
    let mut output = Vec::with_capacity(segments.len() * 3);

    for segment in segments {
        output.push(punct(':', Spacing::Joint, span));
        output.push(punct(':', Spacing::Alone, span));
        output.push(TokenTree::Ident(Ident::new(segment, span)));
    }

    output
}

fn punct(c: char, spacing: Spacing, span: Span) -> TokenTree {
    let mut p = Punct::new(c, spacing);
    p.set_span(span);
    TokenTree::Punct(p)
}

fn group(delimiter: Delimiter, stream: TokenStream, span: Span) -> TokenTree {
    let mut g = Group::new(delimiter, stream);
    g.set_span(span);
    TokenTree::Group(g)
}
