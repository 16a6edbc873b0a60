//! Java source fixtures.

/// A class with a documented field, constructor, and method, and no tags yet.
pub const UNTAGGED_CLASS: &str = r#"package demo;

/**
 * Keeps a running count.
 */
public class Counter {

    /**
     * Current value.
     */
    private int value;

    /**
     * Creates a counter starting at zero.
     */
    public Counter() {
        this.value = 0;
    }

    /**
     * Adds to the counter.
     *
     * @param amount how much to add
     * @return the new value
     */
    public int add(int amount) {
        value += amount;
        return value;
    }
}
"#;

/// A class whose tags are stale, out of order, or not allowed where they sit.
pub const MESSY_CLASS: &str = r#"package demo;

/**
 * Parses things.
 *
 * @since 0.9
 * @author nobody
 */
public class Parser {

    /**
     * Maximum depth.
     *
     * @return never meaningful here
     */
    public static final int MAX_DEPTH = 8;

    /**
     * Parses the input.
     *
     * @param input the text
     * @since 0.9
     */
    public Object parse(String input) {
        return input;
    }
}
"#;

/// Two fields carrying byte-identical comments.
pub const DUPLICATE_COMMENTS: &str = r#"class Point {
    /** Coordinate. */
    int x;
    /** Coordinate. */
    int y;
}
"#;

/// Interface, enum with constants, record, and annotation type.
pub const MIXED_TYPES: &str = r#"package demo;

/** A shape. */
public interface Shape {
    /** Area of the shape. */
    double area();
}

/** Primary colors. */
enum Color {
    /** Red. */
    RED,
    /** Green. */
    GREEN
}

/** A 2D point. */
record Point(int x, int y) {}

/** Marks experimental APIs. */
@interface Experimental {}
"#;

/// Source with comment-like text inside string literals and plain comments.
pub const TRICKY_LITERALS: &str = r#"class Tricky {
    // a line comment with /** inside
    /* a block comment with /** inside */
    String s = "/** not a doc comment */";

    /** Real doc. */
    void run() {}
}
"#;
